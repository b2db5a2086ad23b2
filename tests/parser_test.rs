//! Integration tests for parsing and document assembly.

use cvmark::{
    parse_file, parse_str, parse_str_with_options, validate_str, ParseOptions, PropertyValue,
};

#[test]
fn test_full_document() {
    let input = "\
---
title: Software Engineer
email: jane@example.com
phone: 555-0100
---
# Jane Doe

## Experience

### Acme Corp | Remote
#### Senior Engineer | 2021 - now
- led the platform team
- cut build times in half
#### Engineer | 2019 - 2021
- built the billing pipeline

### Initech
- short consulting engagement

## Education

### State University | Springfield
- BSc Computer Science
";

    let doc = parse_str(input);

    assert_eq!(doc.contact.name, "Jane Doe");
    assert_eq!(doc.contact.title.as_deref(), Some("Software Engineer"));
    assert_eq!(
        doc.contact.channels.get("email").map(String::as_str),
        Some("jane@example.com")
    );

    assert_eq!(doc.section_count(), 2);
    let experience = &doc.sections[0];
    assert_eq!(experience.title, "Experience");
    assert_eq!(experience.items.len(), 2);

    let acme = &experience.items[0];
    assert_eq!(acme.primary.as_deref(), Some("Acme Corp"));
    assert_eq!(acme.primary_right.as_deref(), Some("Remote"));
    assert_eq!(acme.roles.len(), 2);
    assert_eq!(acme.roles[0].title, "Senior Engineer");
    assert_eq!(acme.roles[0].date, "2021 - now");
    assert_eq!(
        acme.roles[0].details,
        vec!["led the platform team", "cut build times in half"]
    );
    assert_eq!(acme.roles[1].details, vec!["built the billing pipeline"]);

    let initech = &experience.items[1];
    assert!(initech.roles.is_empty());
    assert_eq!(initech.details, vec!["short consulting engagement"]);

    let education = &doc.sections[1];
    assert_eq!(education.title, "Education");
    assert_eq!(
        education.items[0].primary_right.as_deref(),
        Some("Springfield")
    );
}

#[test]
fn test_every_item_belongs_to_one_section() {
    let input = "# N\n## A\n### a1\n### a2\n## B\n- free\n### b1";
    let doc = parse_str(input);

    let total: usize = doc.sections.iter().map(|s| s.items.len()).sum();
    assert_eq!(total, doc.item_count());
    assert_eq!(doc.sections[0].items.len(), 2);
    assert_eq!(doc.sections[1].items.len(), 2); // the synthesized bullet item plus b1
}

#[test]
fn test_front_matter_never_overwrites_body_name() {
    let doc = parse_str("---\nname: X\n---\n# Y");
    assert_eq!(doc.contact.name, "Y");
    assert_eq!(doc.properties.get("name"), Some(&PropertyValue::from("X")));
}

#[test]
fn test_property_name_used_when_body_has_none() {
    let doc = parse_str("---\nname: X\n---\n## Experience");
    assert_eq!(doc.contact.name, "X");
}

#[test]
fn test_empty_input_is_permissively_parsed() {
    let doc = parse_str("");
    assert!(doc.contact.name.is_empty());
    assert!(doc.sections.is_empty());

    let validation = validate_str("");
    assert!(!validation.is_valid);
    assert_eq!(
        validation.diagnostics,
        vec!["missing name heading", "at least one section required"]
    );
}

#[test]
fn test_bullet_association() {
    let doc = parse_str("## S\n### I\n#### R | 2020\n- a\n- b");
    assert_eq!(doc.section_count(), 1);
    let section = &doc.sections[0];
    assert_eq!(section.title, "S");
    assert_eq!(section.items.len(), 1);
    let role = &section.items[0].roles[0];
    assert_eq!(role.title, "R");
    assert_eq!(role.date, "2020");
    assert_eq!(role.details, vec!["a", "b"]);
}

#[test]
fn test_page_break_stripping() {
    let doc = parse_str("# N\n## Publications \\break\n### Paper \\break | 2024");
    let section = &doc.sections[0];
    assert_eq!(section.title, "Publications");
    assert!(section.page_break);

    let item = &section.items[0];
    assert!(item.page_break);
    assert_eq!(item.primary.as_deref(), Some("Paper"));
    assert_eq!(item.primary_right.as_deref(), Some("2024"));
}

#[test]
fn test_last_section_is_committed() {
    // The final section must appear even though no later heading closes it.
    let doc = parse_str("# N\n## Only Section\n- detail");
    assert_eq!(doc.section_count(), 1);
    assert_eq!(doc.sections[0].items[0].details, vec!["detail"]);
}

#[test]
fn test_orphan_policies() {
    let dropped = parse_str("### Floating Item");
    assert!(dropped.sections.is_empty());

    let synthesized = parse_str_with_options(
        "### Floating Item",
        ParseOptions::new().synthesize_orphan_items(),
    );
    assert_eq!(synthesized.section_count(), 1);
    assert_eq!(synthesized.sections[0].title, "");
}

#[test]
fn test_crlf_input() {
    let doc = parse_str("---\r\nname: Jane\r\n---\r\n# Jane\r\n## Experience\r\n- a\r\n");
    assert_eq!(doc.contact.name, "Jane");
    assert_eq!(doc.sections[0].items[0].details, vec!["a"]);
}

#[test]
fn test_blank_and_unrecognized_lines_skipped() {
    let doc = parse_str("# N\n\n\nplain prose line\n## S\n\n- a\n");
    assert_eq!(doc.contact.name, "N");
    assert_eq!(doc.section_count(), 1);
    assert_eq!(doc.sections[0].items[0].details, vec!["a"]);
}

#[test]
fn test_heading_requires_trailing_space() {
    // "##Experience" has no marker space and is not a heading.
    let doc = parse_str("# N\n##Experience\n## Real");
    assert_eq!(doc.section_count(), 1);
    assert_eq!(doc.sections[0].title, "Real");
}

#[test]
fn test_parse_file_round_trip() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "# Jane\n## Experience\n### Acme\n").unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc.contact.name, "Jane");
    assert_eq!(doc.item_count(), 1);
}
