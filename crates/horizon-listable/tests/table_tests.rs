//! Table builder and element tests.

mod common;

use common::{RecordingTableView, Setting, Title};
use horizon_listable::layout::Element;
use horizon_listable::table::{
    AnyTableRow, Table, TableAccessory, TableContentBuilder, TableRow, TableSection,
    TableProperties, TableSectionBuilder, TableStyle,
};
use horizon_listable::{Key, ListableError, Rect, Size, SizeConstraint, Sizing};

#[test]
fn test_table_builders_mirror_list_builders() {
    let mut section = TableSectionBuilder::new();
    assert!(section.is_empty());

    section += Setting("wifi");
    section += TableRow::new(Setting("bluetooth")).with_accessory(TableAccessory::Checkmark);
    section += vec![AnyTableRow::from(Setting("cellular"))];
    section.add_all([Setting("vpn"), Setting("hotspot")]);
    assert_eq!(section.len(), 5);

    let mut content = TableContentBuilder::new();
    content += TableSection::new("empty");
    content += section.into_section("connections");
    content += TableSection::new("also empty").with_header(Title("General"));
    assert!(!content.is_empty());

    content.remove_empty();
    let snapshot = content.content();
    assert_eq!(snapshot.sections().len(), 1);
    assert_eq!(snapshot.sections()[0].identifier, Key::from("connections"));
    assert_eq!(
        snapshot.sections()[0].rows[1].accessory(),
        TableAccessory::Checkmark
    );
}

#[test]
fn test_table_fill_and_measure() {
    let table = Table::<RecordingTableView>::new(|table| {
        table.appearance.style = TableStyle::Grouped;
        table.add(TableSection::build("general", |section| {
            section.add_all([Setting("about"), Setting("storage")]);
        }));
    });

    assert_eq!(
        table.measure(&SizeConstraint::new(320.0, 480.0)),
        Size::new(320.0, 480.0)
    );

    let measured = table.with_sizing(Sizing::MeasureContent);
    assert_eq!(
        measured.content().measure(&SizeConstraint::new(320.0, None)),
        Size::new(320.0, 88.0)
    );
}

#[test]
fn test_empty_table_measures_zero() {
    let table = Table::<RecordingTableView>::new(|_| {}).with_sizing(Sizing::MeasureContent);
    assert_eq!(
        table.measure(&SizeConstraint::new(320.0, f32::INFINITY)).height,
        0.0
    );
}

#[test]
fn test_table_description_is_idempotent() {
    let table = Table::<RecordingTableView>::new(|table| {
        table.add(TableSection::new("s").with_rows([Setting("a")]));
    });
    let bounds = Rect::new(0.0, 0.0, 375.0, 600.0);

    let description = table.backing_view_description(bounds, None).unwrap();
    let mut handle = description.build();
    description.apply(&mut handle).unwrap();
    description.apply(&mut handle).unwrap();

    let view = handle.downcast_ref::<RecordingTableView>().unwrap();
    assert_eq!(view.frame, bounds);
    assert_eq!(view.rows, 1);
    assert_eq!(view.configure_calls, 3);
}

#[test]
fn test_duplicate_rows_are_accepted() {
    common::init_tracing();

    let properties = TableProperties::build(|table| {
        table.add(TableSection::new("network").with_rows([Setting("wifi"), Setting("wifi")]));
    });
    assert!(matches!(
        properties.content().validate(),
        Err(ListableError::DuplicateRow { identifier, .. }) if identifier == Key::from("wifi")
    ));

    let table = Table::<RecordingTableView>::from_properties(properties)
        .with_sizing(Sizing::MeasureContent);
    assert_eq!(table.properties().content().row_count(), 2);
    assert_eq!(
        table.measure(&SizeConstraint::new(320.0, None)),
        Size::new(320.0, 88.0)
    );

    let handle = table
        .backing_view_description(Rect::new(0.0, 0.0, 320.0, 88.0), None)
        .unwrap()
        .build();
    assert_eq!(handle.downcast_ref::<RecordingTableView>().unwrap().rows, 2);
}
