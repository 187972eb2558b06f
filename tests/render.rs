use ratatui::{backend::TestBackend, Terminal};
use taskmesh::store::Item;
use taskmesh::ui::components::{ErrorBar, InputDialog, StatusBar, TaskList};
use taskmesh::ui::{App, LayoutManager};

/// Compose a full frame the way the event loop does on every iteration
fn draw_frame(terminal: &mut Terminal<TestBackend>, app: &App) {
    terminal
        .draw(|f| {
            let chunks = LayoutManager::main_layout(f.area(), app.error_message().is_some());
            TaskList::render(f, chunks[0], app);
            ErrorBar::render(f, chunks[1], app);
            StatusBar::render(f, chunks[2], app);
            InputDialog::render(f, app);
        })
        .unwrap();
}

fn app_with_items() -> App {
    let mut app = App::new();
    app.apply_snapshot(vec![
        Item {
            id: "a".to_string(),
            title: "First".to_string(),
            done: false,
            deleted: false,
        },
        Item {
            id: "b".to_string(),
            title: "Second".to_string(),
            done: true,
            deleted: false,
        },
    ]);
    app
}

const DEGENERATE_SIZES: [(u16, u16); 7] = [(0, 0), (1, 1), (2, 1), (1, 2), (5, 2), (80, 1), (1, 40)];

#[test]
fn test_render_survives_tiny_terminals() {
    let mut app = app_with_items();
    app.set_error("store unreachable".to_string());

    for (width, height) in DEGENERATE_SIZES {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        draw_frame(&mut terminal, &app);
    }
}

#[test]
fn test_render_survives_tiny_terminals_with_dialog_open() {
    let mut app = app_with_items();
    app.start_create();
    for c in "Walk dog".chars() {
        app.push_input(c);
    }

    for (width, height) in DEGENERATE_SIZES {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        draw_frame(&mut terminal, &app);
    }
}

#[test]
fn test_render_empty_list_on_tiny_terminal() {
    let app = App::new();
    let mut terminal = Terminal::new(TestBackend::new(1, 1)).unwrap();
    draw_frame(&mut terminal, &app);
}

#[test]
fn test_error_line_collapses_when_no_error() {
    let area = ratatui::layout::Rect::new(0, 0, 80, 24);

    let chunks = LayoutManager::main_layout(area, false);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1].height, 0);
    assert_eq!(chunks[2].height, 1);

    let chunks = LayoutManager::main_layout(area, true);
    assert_eq!(chunks[1].height, 1);
}

#[test]
fn test_dialog_rect_stays_inside_area() {
    for (width, height) in DEGENERATE_SIZES {
        let area = ratatui::layout::Rect::new(0, 0, width, height);
        let dialog = LayoutManager::input_dialog_rect(area);
        assert!(dialog.right() <= area.right());
        assert!(dialog.bottom() <= area.bottom());
    }
}
