//! A connection walking from login into the menu tree

use std::time::{Duration, Instant};

use webbs::grid::{BoxStyle, GridDocument, Pen};
use webbs::menu::{
    Action, ActionType, LayoutStore, MemoryMenuStore, MenuId, MenuItem, MenuItemStore,
    MenuNavigator, StoreError,
};
use webbs::session::{Effect, MemorySessionStore, Question, SessionStore, User};
use webbs::{Color, Config};

const MAIN: MenuId = MenuId(1);
const FILES: MenuId = MenuId(2);

fn board_store() -> MemoryMenuStore {
    let mut store = MemoryMenuStore::new();

    let mut layout = GridDocument::new(40, 12).unwrap();
    layout.draw_box(0, 0, 39, 11, BoxStyle::Double, Pen::new(Color::BrightBlue, Color::Black));
    layout.place_text(2, 1, "MAIN MENU", Pen::new(Color::BrightWhite, Color::Black));
    store.save_layout(MAIN, &layout).unwrap();

    let items = [
        MenuItem::new(MAIN, 'f', "File areas", Action::Submenu { menu_id: FILES }).at(2, 3),
        MenuItem::new(MAIN, 'm', "Message boards", Action::Command {
            command: "boards".into(),
        })
        .at(2, 4)
        .with_min_level(5),
        MenuItem::new(MAIN, 's', "Sysop tools", Action::Script {
            script_path: "/opt/bbs/sysop.sh".into(),
        })
        .at(2, 5)
        .with_min_level(100),
        MenuItem::new(FILES, 'b', "Back", Action::Submenu { menu_id: MAIN }),
    ];
    for item in items {
        store.create_item(item).unwrap();
    }
    store
}

fn member(level: i32) -> User {
    User {
        id: 42,
        username: "rhea".into(),
        display_name: "Rhea".into(),
        user_level: level,
    }
}

#[test]
fn login_then_navigate() {
    let store = board_store();
    let navigator = MenuNavigator::new(&store);
    let mut sessions = MemorySessionStore::new(Duration::from_secs(600));
    let now = Instant::now();
    let id = sessions.create(now);

    let session = sessions.touch(id, now).unwrap();
    assert_eq!(session.dialogue.handle_line("login"), Effect::Ask(Question::Username));
    session.dialogue.handle_line("rhea");
    let effect = session.dialogue.handle_line("correct horse");
    assert!(matches!(effect, Effect::Authenticate { .. }));
    session.dialogue.sign_in(member(5));
    assert_eq!(session.dialogue.prompt(), "rhea> ");

    let menu = session.open_menu(MAIN).unwrap();
    let screen = navigator.screen(menu, "Select option: ").unwrap();
    assert!(screen.contains("MAIN MENU"));
    assert!(screen.ends_with("\x1b[12;1H\x1b[37;40mSelect option: \x1b[?25h"));

    let boards = navigator.navigate(menu, "m").unwrap();
    assert!(boards.result.matched);
    assert_eq!(boards.result.action_type(), Some(ActionType::Command));
    assert_eq!(menu.current_menu, MAIN);

    let sysop = navigator.navigate(menu, "s").unwrap();
    assert!(!sysop.result.matched);
    assert_eq!(sysop.event.user_level, 5);

    let files = navigator.navigate(menu, "F").unwrap();
    assert_eq!(files.result.next_menu_id, Some(FILES));
    assert_eq!(menu.current_menu, FILES);
    // No stored layout for the file menu: prompt only.
    let screen = navigator.screen(menu, "> ").unwrap();
    assert!(screen.starts_with("\x1b[?25l\x1b[25;1H"));

    navigator.navigate(menu, "b").unwrap();
    assert_eq!(menu.current_menu, MAIN);
}

#[test]
fn idle_sessions_are_dropped() {
    let config: Config = toml::from_str("[session]\nidle_timeout_secs = 60\n").unwrap();
    let mut sessions = MemorySessionStore::from_config(&config.session);
    let start = Instant::now();
    let id = sessions.create(start);
    assert_eq!(sessions.expire_idle(start + Duration::from_secs(61)), vec![id]);
    assert!(sessions.is_empty());
}

#[test]
fn duplicate_hotkey_is_refused_by_store() {
    let mut store = board_store();
    let clash = MenuItem::new(MAIN, 'F', "Favourites", Action::External {
        program: "fav".into(),
    });
    assert!(matches!(
        store.create_item(clash),
        Err(StoreError::DuplicateHotkey { .. })
    ));
}

#[test]
fn accessible_items_follow_screen_order() {
    let store = board_store();
    let labels: Vec<String> = store
        .accessible_items(MAIN, 100)
        .unwrap()
        .into_iter()
        .map(|item| item.display_label())
        .collect();
    assert_eq!(
        labels,
        vec!["[F] File areas", "[M] Message boards", "[S] Sysop tools"]
    );
}
