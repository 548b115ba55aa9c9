//! Single pages driven directly, without running a whole session.

use bookshelf::app::{FormField, FormSession, PageKind, ScriptedConsole, Transition};
use bookshelf::{
    initialize_with, BookStatus, BookshelfError, Config, Router, RouterMode, RouterOptions,
};
use std::time::Duration;
use tempfile::TempDir;

fn router_with(dir: &TempDir, options: RouterOptions) -> Router<ScriptedConsole> {
    let config = Config {
        data_file: dir.path().join("data.json"),
        ..Default::default()
    };
    initialize_with(&config, ScriptedConsole::default(), options).unwrap()
}

fn fill_form(router: &mut Router<ScriptedConsole>, form: &mut FormSession) -> Option<Transition> {
    router
        .handle_form_input(form, FormField::Title, "Valid Title")
        .unwrap();
    router
        .handle_form_input(form, FormField::Author, "Valid Author")
        .unwrap();
    router
        .handle_form_input(form, FormField::Year, "2023")
        .unwrap()
}

#[test]
fn add_book_form_stores_a_new_book() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());
    let mut form = FormSession::new();

    let next = fill_form(&mut router, &mut form);

    assert_eq!(next, Some(Transition::to(PageKind::Catalog)));
    let stored = router.catalog().load_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].title, "Valid Title");
    assert_eq!(stored[0].author, "Valid Author");
    assert_eq!(stored[0].year, "2023");
    assert_eq!(stored[0].status, BookStatus::Available);
    // Headless runs keep the answers around.
    assert_eq!(form.values(), Some(("Valid Title", "Valid Author", "2023")));
}

#[test]
fn interactive_form_is_cleared_after_adding() {
    let dir = tempfile::tempdir().unwrap();
    let options = RouterOptions {
        mode: RouterMode::Interactive,
        pause: Duration::ZERO,
    };
    let mut router = router_with(&dir, options);
    let mut form = FormSession::new();

    fill_form(&mut router, &mut form);

    assert!(!form.is_complete());
    assert_eq!(form.next_missing(), Some(FormField::Title));
    assert_eq!(router.catalog().len(), 1);
}

#[test]
fn rejected_form_value_keeps_the_field_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());
    let mut form = FormSession::new();

    let next = router
        .handle_form_input(&mut form, FormField::Title, "Va")
        .unwrap();

    assert_eq!(next, None);
    assert_eq!(form.next_missing(), Some(FormField::Title));
    assert!(router
        .console()
        .output()
        .iter()
        .any(|line| line == "--- Invalid input: value must be at least 3 characters long ---"));
    assert!(router.catalog().is_empty());
}

#[test]
fn remove_page_only_removes_on_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());
    fill_form(&mut router, &mut FormSession::new());

    let next = router
        .handle_input(PageKind::RemoveConfirm, "anything else", Some(1))
        .unwrap();
    assert_eq!(next, Transition::to(PageKind::Catalog));
    assert_eq!(router.catalog().load_all().unwrap().len(), 1);

    let next = router
        .handle_input(PageKind::RemoveConfirm, "1", Some(1))
        .unwrap();
    assert_eq!(next, Transition::to(PageKind::Catalog));
    assert!(router.catalog().is_empty());
    assert!(router.catalog().load_all().unwrap().is_empty());
}

#[test]
fn update_page_toggles_status_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());
    fill_form(&mut router, &mut FormSession::new());

    let next = router
        .handle_input(PageKind::UpdateStatus, "2", Some(1))
        .unwrap();
    assert_eq!(next, Transition::to_book(PageKind::BookDetail, 1));
    assert_eq!(router.catalog().get(1).unwrap().status, BookStatus::CheckedOut);
    assert_eq!(
        router.catalog().load_all().unwrap()[0].status,
        BookStatus::Available
    );

    router
        .handle_input(PageKind::UpdateStatus, "1", Some(1))
        .unwrap();
    assert_eq!(router.catalog().get(1).unwrap().status, BookStatus::Available);

    for input in ["", "0", "test", "30"] {
        let next = router
            .handle_input(PageKind::UpdateStatus, input, Some(1))
            .unwrap();
        assert_eq!(next, Transition::Ignored);
        assert_eq!(router.catalog().get(1).unwrap().status, BookStatus::Available);
    }
}

#[test]
fn book_detail_links_to_its_actions() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());
    fill_form(&mut router, &mut FormSession::new());

    assert_eq!(
        router.handle_input(PageKind::BookDetail, "u", Some(1)).unwrap(),
        Transition::to_book(PageKind::UpdateStatus, 1)
    );
    assert_eq!(
        router.handle_input(PageKind::BookDetail, "r", Some(1)).unwrap(),
        Transition::to_book(PageKind::RemoveConfirm, 1)
    );
    assert_eq!(
        router.handle_input(PageKind::BookDetail, "c", Some(1)).unwrap(),
        Transition::to(PageKind::Catalog)
    );
}

#[test]
fn book_pages_need_a_book() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());

    let err = router.render(PageKind::BookDetail, None).unwrap_err();
    assert!(matches!(err, BookshelfError::MissingPayload("b")));

    let err = router
        .handle_input(PageKind::RemoveConfirm, "1", Some(42))
        .unwrap_err();
    assert!(matches!(err, BookshelfError::BookNotFound(42)));
}

#[test]
fn unknown_codes_cannot_be_redirected_to() {
    let dir = tempfile::tempdir().unwrap();
    let mut router = router_with(&dir, RouterOptions::headless());

    let err = router.redirect("x", None).unwrap_err();
    assert!(matches!(err, BookshelfError::UnknownPage(code) if code == "x"));
}

#[test]
fn registry_holds_every_page_once() {
    let dir = tempfile::tempdir().unwrap();
    let router = router_with(&dir, RouterOptions::headless());

    let codes: Vec<&str> = router.pages().iter().map(|page| page.code()).collect();
    assert_eq!(codes, ["h", "c", "s", "n", "b", "r", "u", "q"]);

    let home_menu: Vec<&str> = router
        .menu_for(PageKind::Home)
        .iter()
        .map(|entry| entry.code)
        .collect();
    assert_eq!(home_menu, ["c", "s", "n", "q"]);
}

#[test]
fn construction_never_draws_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let interactive = RouterOptions {
        mode: RouterMode::Interactive,
        pause: Duration::ZERO,
    };

    for options in [interactive, RouterOptions::headless()] {
        let router = router_with(&dir, options);
        assert!(router.console().output().is_empty());
    }
}
