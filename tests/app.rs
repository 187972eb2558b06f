use taskmesh::constants::ERROR_DISPLAY_DWELL;
use taskmesh::store::Item;
use taskmesh::ui::{Action, App, Mode};
use tokio::time::Instant;

fn item(id: &str, title: &str, done: bool) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        done,
        deleted: false,
    }
}

fn three_items() -> Vec<Item> {
    vec![
        item("a", "First", false),
        item("b", "Second", true),
        item("c", "Third", false),
    ]
}

#[test]
fn test_new_app_state() {
    let app = App::new();
    assert!(!app.should_quit);
    assert!(app.items().is_empty());
    assert_eq!(app.selected_index(), 0);
    assert_eq!(*app.mode(), Mode::Normal);
    assert!(app.error_message().is_none());
    assert!(app.selected_item().is_none());
}

#[test]
fn test_selection_movement_clamps_at_bounds() {
    let mut app = App::new();
    app.apply_snapshot(three_items());

    // Moving up from the first row stays put
    app.select_previous();
    assert_eq!(app.selected_index(), 0);

    app.select_next();
    app.select_next();
    assert_eq!(app.selected_index(), 2);

    // Moving down from the last row stays put
    app.select_next();
    assert_eq!(app.selected_index(), 2);
}

#[test]
fn test_selection_ignored_on_empty_list() {
    let mut app = App::new();
    app.select_next();
    assert_eq!(app.selected_index(), 0);
    app.select_previous();
    assert_eq!(app.selected_index(), 0);
    assert!(app.selected_item().is_none());
}

#[test]
fn test_snapshot_shrink_clamps_selection_downward() {
    let mut app = App::new();
    app.apply_snapshot(three_items());
    app.select_next();
    app.select_next();
    assert_eq!(app.selected_index(), 2);

    // Shrinking snapshot pulls the selection down to the last row
    app.apply_snapshot(vec![item("a", "First", false), item("b", "Second", true)]);
    assert_eq!(app.selected_index(), 1);

    // Growing back does not move the selection upward
    app.apply_snapshot(three_items());
    assert_eq!(app.selected_index(), 1);
}

#[test]
fn test_start_create_opens_empty_buffer() {
    let mut app = App::new();
    app.start_create();
    assert_eq!(*app.mode(), Mode::Create { buffer: String::new() });
}

#[test]
fn test_start_edit_seeds_selected_title() {
    let mut app = App::new();
    app.apply_snapshot(three_items());
    app.select_next();
    app.start_edit();

    assert_eq!(
        *app.mode(),
        Mode::Edit {
            id: "b".to_string(),
            buffer: "Second".to_string(),
        }
    );
}

#[test]
fn test_start_edit_without_selection_is_noop() {
    let mut app = App::new();
    app.start_edit();
    assert_eq!(*app.mode(), Mode::Normal);
}

#[test]
fn test_input_editing() {
    let mut app = App::new();
    app.start_create();
    app.push_input('h');
    app.push_input('i');
    app.pop_input();
    app.push_input('o');
    assert_eq!(*app.mode(), Mode::Create { buffer: "ho".to_string() });
}

#[test]
fn test_cancel_input_discards_buffer() {
    let mut app = App::new();
    app.start_create();
    app.push_input('x');
    app.cancel_input();
    assert_eq!(*app.mode(), Mode::Normal);

    // Re-entering create mode starts fresh
    app.start_create();
    assert_eq!(*app.mode(), Mode::Create { buffer: String::new() });
}

#[test]
fn test_submit_create_trims_and_resets_mode() {
    let mut app = App::new();
    app.start_create();
    for c in "  Walk dog  ".chars() {
        app.push_input(c);
    }

    let action = app.submit_input().unwrap();
    match action {
        Action::CreateItem(created) => {
            assert!(!created.id.is_empty());
            assert_eq!(created.title, "Walk dog");
            assert!(!created.done);
            assert!(!created.deleted);
        }
        other => panic!("expected CreateItem, got {other:?}"),
    }
    assert_eq!(*app.mode(), Mode::Normal);
}

#[test]
fn test_submit_whitespace_only_is_ignored() {
    let mut app = App::new();
    app.start_create();
    app.push_input(' ');
    app.push_input(' ');

    assert!(app.submit_input().is_none());
    // Mode stays unchanged so the user can keep typing
    assert_eq!(*app.mode(), Mode::Create { buffer: "  ".to_string() });
}

#[test]
fn test_submit_edit_keeps_original_id() {
    let mut app = App::new();
    app.apply_snapshot(three_items());
    app.start_edit();
    app.push_input('!');

    let action = app.submit_input().unwrap();
    assert_eq!(
        action,
        Action::EditTitle {
            id: "a".to_string(),
            title: "First!".to_string(),
        }
    );
    assert_eq!(*app.mode(), Mode::Normal);
}

#[test]
fn test_submit_in_normal_mode_does_nothing() {
    let mut app = App::new();
    app.apply_snapshot(three_items());
    assert!(app.submit_input().is_none());
}

#[test]
fn test_toggle_selected_inverts_done() {
    let mut app = App::new();
    app.apply_snapshot(three_items());

    assert_eq!(
        app.toggle_selected(),
        Some(Action::ToggleDone {
            id: "a".to_string(),
            done: true,
        })
    );

    app.select_next();
    assert_eq!(
        app.toggle_selected(),
        Some(Action::ToggleDone {
            id: "b".to_string(),
            done: false,
        })
    );

    // Local state is untouched until the change feed delivers it
    assert!(!app.items()[0].done);
}

#[test]
fn test_toggle_and_delete_without_selection() {
    let app = App::new();
    assert!(app.toggle_selected().is_none());
    assert!(app.delete_selected().is_none());
}

#[test]
fn test_delete_selected_targets_selected_item() {
    let mut app = App::new();
    app.apply_snapshot(three_items());
    app.select_next();
    app.select_next();

    assert_eq!(
        app.delete_selected(),
        Some(Action::SoftDelete { id: "c".to_string() })
    );
}

#[tokio::test(start_paused = true)]
async fn test_error_deadline_reflects_dwell() {
    let mut app = App::new();
    assert!(app.error_deadline().is_none());

    let before = Instant::now();
    app.set_error("something went wrong".to_string());

    assert_eq!(app.error_message(), Some("something went wrong"));
    assert_eq!(app.error_deadline(), Some(before + ERROR_DISPLAY_DWELL));

    app.clear_error();
    assert!(app.error_message().is_none());
    assert!(app.error_deadline().is_none());
}

#[test]
fn test_new_error_replaces_previous() {
    let mut app = App::new();
    app.set_error("first".to_string());
    app.set_error("second".to_string());
    assert_eq!(app.error_message(), Some("second"));
}
