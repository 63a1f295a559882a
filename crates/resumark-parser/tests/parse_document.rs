//! End-to-end parser tests over whole CV documents.

use resumark_model::{EndDate, SectionContent, SectionId};
use resumark_parser::parse_with_lookup;
use resumark_source_map::Position;

const FULL_CV: &str = r#"---
name: Ada Lovelace
email_address: ada@example.org
phone_number: "+44 20 7946 0958"
github: adalovelace
---

# Summary

Engineer working on compilers and numerical software.

# Experience

```resume:experience
- company: Analytical Engines Ltd
  location: London
  url: https://engines.example
  roles:
    - title: Principal Engineer
      team: Compute
      start: 2021-04
      end: present
      summary: Owns the instruction pipeline.
      highlights:
        - Cut compile times by 60%
      projects:
        - name: Loom rewrite
          description: Replaced the legacy scheduler.
          bullets:
            - Shipped without downtime
- company: Babbage & Co
  roles:
    - title: Engineer
      start: 2018-04
      end: 2021-03
```

# Education

```resume:education
- school: University of London
  degree: BSc Mathematics
  start: 2014-09
  end: 2018-06
```

# Skills

```resume:skills
columns: 2
items:
  - category: Languages
    items:
      - Rust
      - Ada
  - category: Practices
    description: Rigorous code review
```

# Languages

```resume:languages
- language: English
  level: Native
- language: Japanese
  level: Business
```
"#;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn full_document_parses_cleanly() {
    let result = parse_with_lookup(FULL_CV, no_env);
    assert!(result.issues.is_empty(), "{:?}", result.issues);

    let cv = &result.cv;
    assert_eq!(cv.metadata.value("name"), Some("Ada Lovelace"));
    assert_eq!(cv.metadata.value("github"), Some("adalovelace"));

    let ids: Vec<_> = cv.sections.iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        [
            SectionId::Summary,
            SectionId::Experience,
            SectionId::Education,
            SectionId::Skills,
            SectionId::Languages,
        ]
    );

    let SectionContent::Experience(entries) = &cv.section(SectionId::Experience).unwrap().content
    else {
        panic!("expected experience entries");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].company.value, "Analytical Engines Ltd");
    assert_eq!(entries[0].roles[0].end.as_ref().unwrap().value, EndDate::Present);
    assert_eq!(entries[0].roles[0].projects[0].name.value, "Loom rewrite");
    // Declared order is preserved, not re-sorted.
    assert_eq!(entries[1].company.value, "Babbage & Co");

    let SectionContent::Skills(skills) = &cv.section(SectionId::Skills).unwrap().content else {
        panic!("expected skills content");
    };
    assert_eq!(skills.columns, Some(2));
    assert!(skills.categorized());
}

#[test]
fn ranges_point_into_the_original_document() {
    let result = parse_with_lookup(FULL_CV, no_env);
    let cv = &result.cv;

    // `name: Ada Lovelace` sits on line 1 of the document.
    let name = cv.frontmatter_pair("name").unwrap();
    assert_eq!(name.value.range.start, Position::new(1, 6));

    // The Experience heading is recorded with its source title range.
    let experience = cv.section(SectionId::Experience).unwrap();
    assert_eq!(experience.title.value, "Experience");
    assert_eq!(experience.title.range.start.character, 2);

    // Company scalar of the first experience entry: the fenced block
    // opens on line 13, so its first entry is on line 14.
    let SectionContent::Experience(entries) = &experience.content else {
        panic!("expected experience entries");
    };
    assert_eq!(entries[0].company.range.start.line, 14);
}

#[test]
fn japanese_document_parses_with_japanese_tags() {
    let doc = r#"---
name: 山田 太郎
name_furigana: やまだ たろう
email_address: taro@example.jp
phone_number: 090-0000-0000
---

# 学歴

| 年 | 月 | 内容 |
|----|----|------|
| 2014 | 4 | 筑波大学 入学 |
| 2018 | 3 | 筑波大学 卒業 |

# 職歴

```resume:experience
- company: 株式会社アクメ
  roles:
    - title: ソフトウェアエンジニア
      start: 2018-04
      end: present
```

# 志望動機

貴社の製品開発に貢献したいと考えています。
"#;

    let result = parse_with_lookup(doc, no_env);
    assert!(result.issues.is_empty(), "{:?}", result.issues);

    let cv = &result.cv;
    assert_eq!(cv.metadata.value("name_furigana"), Some("やまだ たろう"));

    let education = cv.section(SectionId::Education).unwrap();
    let SectionContent::Table(rows) = &education.content else {
        panic!("expected chronological table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].year.value, "2014");
    assert_eq!(rows[1].content.value, "筑波大学 卒業");

    assert!(cv.has_section(SectionId::Experience));
    assert!(cv.has_section(SectionId::Motivation));
}

#[test]
fn issues_accumulate_across_sections() {
    let doc = r#"# Experience

```resume:experience
- location: nowhere
```

# Education

```resume:education
- school: Univ
  start: 14-04
```
"#;

    let result = parse_with_lookup(doc, no_env);
    assert_eq!(result.issues.len(), 2);
    assert!(result.issues[0].message.contains("company"));
    assert!(result.issues[1].message.contains("YYYY-MM"));
    // Both sections still produced content.
    assert_eq!(result.cv.sections.len(), 2);
}

#[test]
fn parsing_twice_yields_identical_results() {
    let first = parse_with_lookup(FULL_CV, no_env);
    let second = parse_with_lookup(FULL_CV, no_env);
    assert_eq!(first, second);
}

#[test]
fn frontmatter_env_conflict_regression() {
    let doc = "---\nname: Ada\nemail_address: \"\"\n---\n\n# Experience\n\nwork\n";
    let result = parse_with_lookup(doc, |var| match var {
        "CV_NAME" => Some("Grace".to_string()),
        "CV_EMAIL" => Some("env@example.org".to_string()),
        _ => None,
    });

    // Non-empty frontmatter wins over the environment.
    assert_eq!(result.cv.metadata.value("name"), Some("Ada"));
    // Empty frontmatter falls through to the environment.
    assert_eq!(
        result.cv.metadata.value("email_address"),
        Some("env@example.org")
    );
}
