use std::io::Cursor;

use proptest::prelude::*;
use stockroom_cli::{OutputFormat, Session};
use stockroom_inventory::{InventoryConfig, Item};

/// Run a scripted session and return everything it printed.
fn run_script(format: OutputFormat, script: &str) -> (String, Vec<Item>) {
    run_bytes(format, script.as_bytes().to_vec())
}

fn run_bytes(format: OutputFormat, script: Vec<u8>) -> (String, Vec<Item>) {
    let mut session = Session::new(InventoryConfig::default(), format, Cursor::new(script), Vec::new());
    session.run().expect("in-memory IO does not fail");
    let remaining = session.store().list_all();
    let out = String::from_utf8(session.into_output()).expect("output is utf-8");
    (out, remaining)
}

#[test]
fn walkthrough_prints_menu_messages() {
    let script = "\
1\nWidget\nTools\n5\n\
1\nHammer\nTools\n20\n\
6\nTools\n\
4\n1\n5\n\
6\nTools\n\
7\n1\n\
8\n";

    let (out, remaining) = run_script(OutputFormat::Text, script);

    assert!(out.starts_with("\n**** Welcome to the Inventory Management System ****\n"));
    assert!(out.contains(
        "Restock Notification: Item{id=1, name='Widget', category='Tools', quantity=5}\nItem added/updated successfully."
    ));
    assert_eq!(out.matches("Restock Notification").count(), 1);
    assert!(out.contains(
        "Items in category: Tools\n\
         Item{id=2, name='Hammer', category='Tools', quantity=20}\n\
         Item{id=1, name='Widget', category='Tools', quantity=5}\n"
    ));
    assert!(out.contains("Item with ID 1 has been completely removed."));
    assert!(out.contains(
        "Top 1 items with the highest quantity:\n\
         Item{id=2, name='Hammer', category='Tools', quantity=20}\n"
    ));
    assert!(out.ends_with("Exiting Inventory Management System.\n"));

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Hammer");
}

#[test]
fn update_replaces_and_recategorizes() {
    let script = "\
1\nRake\nGarden\n12\n\
2\n1\nRake XL\nTools\n30\n\
6\nGarden\n\
5\n\
8\n";
    let (out, remaining) = run_script(OutputFormat::Text, script);

    assert!(out.contains(
        "Enter new quantity: Item with ID 1 removed successfully.\nItem added/updated successfully."
    ));
    assert!(out.contains("No items found in category: Garden"));
    assert!(out.contains(
        "All Items in Inventory:\nItem{id=1, name='Rake XL', category='Tools', quantity=30}\n"
    ));
    assert_eq!(remaining.len(), 1);
}

#[test]
fn failures_are_reported_not_fatal() {
    let script = "\
3\n9\n\
4\n9\n1\n\
1\nBolt\nHardware\n4\n\
4\n1\n7\n\
4\n1\n3\n\
1\nGhost\nHardware\n0\n\
8\n";
    let (out, remaining) = run_script(OutputFormat::Text, script);

    assert_eq!(out.matches("Item with ID 9 not found.").count(), 2);
    assert!(out.contains("Error: Cannot remove more quantity than available."));
    assert!(out.contains("Quantity updated successfully. Remaining quantity: 1"));
    assert!(out.contains("Error: validation failed: quantity must be greater than zero"));
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].quantity, 1);
}

#[test]
fn update_of_unknown_id_reports_not_found_then_stores() {
    let script = "\
2\n5\nSaw\nTools\n3\n\
2\n5\nSaw\nTools\n0\n\
8\n";
    let (out, remaining) = run_script(OutputFormat::Text, script);

    assert!(out.contains(
        "Item with ID 5 not found.\n\
         Restock Notification: Item{id=5, name='Saw', category='Tools', quantity=3}\n\
         Item added/updated successfully."
    ));
    // The rejected update neither deletes nor reports a delete.
    assert_eq!(out.matches("Item with ID 5").count(), 1);
    assert!(out.contains("Error: validation failed: quantity must be greater than zero"));
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].quantity, 3);
}

#[test]
fn non_utf8_line_does_not_end_the_session() {
    let mut script = b"1\nBolt\nHardware\n15\n6\n".to_vec();
    script.extend_from_slice(b"\xff\xfe\n");
    script.extend_from_slice(b"5\n8\n");

    let (out, remaining) = run_bytes(OutputFormat::Text, script);

    assert!(out.contains("No items found in category: \u{fffd}\u{fffd}"));
    assert!(out.contains("All Items in Inventory:"));
    assert!(out.ends_with("Exiting Inventory Management System.\n"));
    assert_eq!(remaining.len(), 1);
}

#[test]
fn bad_input_reprompts() {
    let script = "\
hello\n\
42\n\
1\nBolt\nHardware\nlots\n-3\n15\n\
3\n0\n1\n\
8\n";
    let (out, remaining) = run_script(OutputFormat::Text, script);

    assert_eq!(out.matches("Invalid command. Try again.").count(), 2);
    // "lots", "-3" for the quantity and "0" for the id.
    assert_eq!(out.matches("Invalid number, please try again.").count(), 3);
    assert!(out.contains("Item with ID 1 removed successfully."));
    assert!(remaining.is_empty());
}

#[test]
fn empty_inventory_and_non_positive_k() {
    let script = "\
5\n\
7\n3\n\
1\nBolt\nHardware\n15\n\
7\n0\n\
7\n-2\n\
8\n";
    let (out, _) = run_script(OutputFormat::Text, script);

    assert_eq!(out.matches("Inventory is empty.").count(), 2);
    assert!(out.contains("Top 0 items with the highest quantity:\n\nPlease Choose"));
    assert!(out.contains("Top -2 items with the highest quantity:\n\nPlease Choose"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let (out, remaining) = run_script(OutputFormat::Text, "1\nBolt\nHardware\n");
    assert!(!out.contains("Exiting"));
    assert!(remaining.is_empty());
}

#[test]
fn json_output_prints_arrays() {
    let script = "\
5\n\
1\nBolt\nHardware\n15\n\
1\nNut\nHardware\n25\n\
6\nHardware\n\
8\n";
    let (out, _) = run_script(OutputFormat::Json, script);

    // Listings follow the prompt on the same line, since input is not echoed.
    let arrays: Vec<&str> = out
        .lines()
        .filter_map(|l| l.find('[').map(|start| &l[start..]))
        .collect();
    assert_eq!(arrays.len(), 2);
    assert_eq!(arrays[0], "[]");

    let listed: Vec<Item> = serde_json::from_str(arrays[1]).unwrap();
    let names: Vec<&str> = listed.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Nut", "Bolt"]);
}

proptest! {
    /// Property: arbitrary input lines never panic the loop, and the store it
    /// leaves behind is internally consistent.
    #[test]
    fn arbitrary_input_keeps_store_consistent(
        lines in prop::collection::vec(prop_oneof![
            (1u32..9).prop_map(|n| n.to_string()),
            (0u64..30).prop_map(|n| n.to_string()),
            "[A-Za-z ]{0,8}",
        ], 0..80)
    ) {
        let script = lines.join("\n") + "\n";
        let mut session = Session::new(
            InventoryConfig::default(),
            OutputFormat::Text,
            Cursor::new(script.into_bytes()),
            Vec::new(),
        );
        prop_assert!(session.run().is_ok());
        prop_assert_eq!(session.store().check_consistency(), Ok(()));
    }
}
