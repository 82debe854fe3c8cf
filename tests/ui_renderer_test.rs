use ratatui::{backend::TestBackend, Terminal};
use tasklist::config::Config;
use tasklist::logger::Logger;
use tasklist::store::TaskStore;
use tasklist::ui::core::Component;
use tasklist::ui::AppComponent;

fn screen(app: &mut AppComponent, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect()
}

#[test]
fn test_empty_view() {
    let mut app = AppComponent::new(TaskStore::new(), &Config::default(), Logger::new());
    let lines = screen(&mut app, 60, 12);

    assert!(lines[0].starts_with("Minhas tasks"));
    assert!(lines[2].contains("Adicionar novo todo"));
    assert!(lines[1].contains("[+]"));
    assert!(lines.iter().any(|l| l.contains("Nenhuma task por aqui")));
    assert!(lines[11].contains("0/0 done"));
}

#[test]
fn test_rows_show_checkbox_title_and_delete() {
    let mut store = TaskStore::new();
    let milk = store.create("Buy milk").unwrap();
    store.create("Walk the dog").unwrap();
    store.toggle(milk.id);

    let mut app = AppComponent::new(store, &Config::default(), Logger::new());
    let lines = screen(&mut app, 60, 12);

    let milk_row = lines.iter().find(|l| l.contains("Buy milk")).unwrap();
    assert!(milk_row.contains("[X] Buy milk"));
    assert!(milk_row.trim_end().ends_with("[-]│"));

    let dog_row = lines.iter().find(|l| l.contains("Walk the dog")).unwrap();
    assert!(dog_row.contains("[ ] Walk the dog"));

    assert!(lines[11].contains("1/2 done"));
}

#[test]
fn test_long_titles_are_truncated() {
    let mut store = TaskStore::new();
    store.create("A very long task title that will not fit").unwrap();

    let mut app = AppComponent::new(store, &Config::default(), Logger::new());
    let lines = screen(&mut app, 30, 10);

    let row = lines.iter().find(|l| l.contains("[ ] A very")).unwrap();
    assert!(row.contains('…'));
    assert!(row.contains("[-]"));
}
