//! List builder and snapshot tests.

mod common;

use common::{Episode, Podcast, Title, init_tracing};
use horizon_listable::Key;
use horizon_listable::list::{
    AnyRow, Appearance, ContentBuilder, HeaderFooter, IndexPath, LayoutDirection, ListProperties,
    Row, RowSizing, Section, SectionBuilder, SelectionStyle,
};

fn podcast_titles(section: &Section) -> Vec<String> {
    section
        .rows
        .iter()
        .filter_map(|row| row.element::<Podcast>())
        .map(|podcast| podcast.title.clone())
        .collect()
}

#[test]
fn test_builders_start_empty() {
    assert!(SectionBuilder::new().is_empty());
    assert!(ContentBuilder::new().is_empty());
    assert!(ContentBuilder::new().content().is_empty());
}

#[test]
fn test_mixed_forms_keep_call_order() {
    init_tracing();

    let section = Section::build("mixed", |section| {
        section.add(Podcast::new(1, "one"));
        *section += Row::new(Podcast::new(2, "two"));
        *section += vec![AnyRow::from(Episode(10)), AnyRow::from(Podcast::new(3, "three"))];
        section.add_all(vec![Podcast::new(4, "four"), Podcast::new(5, "five")]);
        *section += vec![Row::new(Podcast::new(6, "six"))];
    });

    assert_eq!(section.row_count(), 7);
    assert_eq!(
        podcast_titles(&section),
        ["one", "two", "three", "four", "five", "six"]
    );
    assert_eq!(section.rows[2].element::<Episode>(), Some(&Episode(10)));
}

#[test]
fn test_bare_value_matches_wrapped_row() {
    let bare = Section::build("s", |section| {
        *section += Podcast::new(1, "a");
        *section += vec![Podcast::new(2, "b")];
    });
    let wrapped = Section::build("s", |section| {
        *section += Row::new(Podcast::new(1, "a"));
        *section += vec![Row::new(Podcast::new(2, "b"))];
    });

    assert_eq!(bare.row_count(), wrapped.row_count());
    assert_eq!(podcast_titles(&bare), podcast_titles(&wrapped));
    assert_eq!(bare, wrapped);
}

#[test]
fn test_remove_empty_keeps_non_empty_sections_in_order() {
    let mut builder = ContentBuilder::new();
    builder += Section::new("A");
    builder += Section::new("B").with_rows([Episode(1), Episode(2)]);
    builder += Section::new("C");

    builder.remove_empty();
    let ids: Vec<&Key> = builder.sections.iter().map(|s| &s.identifier).collect();
    assert_eq!(ids, [&Key::from("B")]);

    let before = builder.content();
    builder.remove_empty();
    assert_eq!(builder.content(), before);
}

#[test]
fn test_headers_do_not_make_content_non_empty() {
    let mut builder = ContentBuilder::new();
    builder.header = Some(HeaderFooter::new(Title("Library")).into());
    builder += Section::new("empty").with_header(Title("Nothing here"));

    assert!(builder.is_empty());
    assert!(builder.content().is_empty());
}

#[test]
fn test_snapshot_unaffected_by_later_mutation() {
    let mut builder = ContentBuilder::new();
    builder += Section::new("recent").with_rows([Podcast::new(1, "original")]);
    let snapshot = builder.content();

    if let Some(section) = builder.section_mut(&Key::from("recent")) {
        if let Some(row) = section.rows[0].row_mut::<Podcast>() {
            row.element.title = "changed".into();
        }
        section.rows.push(AnyRow::from(Podcast::new(2, "added")));
    }
    builder += Section::new("later").with_rows([Episode(1)]);

    assert_eq!(snapshot.sections().len(), 1);
    assert_eq!(podcast_titles(&snapshot.sections()[0]), ["original"]);
    assert_eq!(builder.row_count(), 3);
}

#[test]
fn test_content_queries() {
    let content = ContentBuilder::build(|list| {
        list.footer = Some(Title("end").into());
        list.add(Section::new("a").with_rows([Episode(1), Episode(2)]));
        list.add(Section::new("b").with_rows([
            Row::new(Episode(3)).with_selection_style(SelectionStyle::Tappable),
        ]));
    });

    assert_eq!(content.row_count(), 3);
    assert_eq!(content.footer().and_then(|f| f.element::<Title>()), Some(&Title("end")));
    assert_eq!(content.last_index_path(), Some(IndexPath::new(1, 0)));
    assert_eq!(
        content.row(IndexPath::new(1, 0)).map(AnyRow::selection_style),
        Some(SelectionStyle::Tappable)
    );
    assert_eq!(content.validate(), Ok(()));
}

#[test]
fn test_list_properties_build() {
    let properties = ListProperties::build(|list| {
        list.appearance.direction = LayoutDirection::Horizontal;
        list.content.header = Some(Title("Podcasts").into());
        list.add(Section::build("all", |section| {
            section.add(Row::new(Podcast::new(1, "a")).with_sizing(RowSizing::Fixed(80.0)));
        }));
    });

    assert_eq!(properties.appearance().direction, LayoutDirection::Horizontal);
    assert!(properties.content().header().is_some());
    assert_eq!(
        properties.content().sections()[0].rows[0].sizing(),
        RowSizing::Fixed(80.0)
    );
}

#[test]
fn test_appearance_config_round_trip() {
    let json = r#"{
        "background_color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0 },
        "direction": "horizontal",
        "content_insets": { "left": 16.0, "top": 8.0, "right": 16.0, "bottom": 8.0 },
        "row_spacing": 12.0
    }"#;
    let appearance: Appearance = serde_json::from_str(json).unwrap();

    assert_eq!(appearance.direction, LayoutDirection::Horizontal);
    assert_eq!(appearance.content_insets.horizontal(), 32.0);
    assert_eq!(appearance.row_spacing, 12.0);
    assert_eq!(appearance.default_row_height, Appearance::default().default_row_height);

    let encoded = serde_json::to_string(&appearance).unwrap();
    let decoded: Appearance = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, appearance);
}
