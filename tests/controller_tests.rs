//! Page controller behavior through the public API.

mod fixtures;
use fixtures::*;

use folio::constants::{
    CLASS_ACTIVE, CLASS_SHOW, MSG_CONTACT_SENT, MSG_MISSING_FIELDS, THEME_ATTRIBUTE,
    THEME_STORAGE_KEY,
};
use folio::dom::{ElementId, ElementRegistry, FormField, PageLayout, ScrollBehavior};
use folio::events::PageEvent;
use folio::notify::Severity;
use folio::storage::{MemoryStore, PreferenceStore};
use folio::theme::Theme;
use folio::validation::is_valid_email;

fn click(target: ElementId) -> PageEvent {
    PageEvent::Click { target }
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_system_dark_applies_without_storing() {
    let controller = controller_with(PageLayout::portfolio(), MemoryStore::new(), true);

    assert_eq!(controller.state().theme, Theme::Dark);
    assert_eq!(
        controller.registry().root_attribute(THEME_ATTRIBUTE).as_deref(),
        Some("dark")
    );
    assert_eq!(controller.registry().text(ElementId::ThemeIcon), "☀️");
    assert_eq!(controller.store().get(THEME_STORAGE_KEY), None);
}

#[test]
fn test_even_toggles_restore_theme_and_store_it() {
    let mut controller = portfolio_controller();
    let initial = controller.state().theme;

    for round in 1..=4 {
        controller.handle_event(&click(ElementId::ThemeToggle));
        let expected = if round % 2 == 0 {
            initial
        } else {
            initial.toggled()
        };
        assert_eq!(controller.state().theme, expected);
        assert_eq!(
            controller.store().get(THEME_STORAGE_KEY).as_deref(),
            Some(expected.as_str())
        );
    }
}

#[test]
fn test_stored_preference_survives_reload() {
    let mut controller = portfolio_controller();
    controller.handle_event(&click(ElementId::ThemeToggle));
    let (_, store) = controller.into_parts();

    // Light OS signal, but the stored choice wins
    let reloaded = controller_with(PageLayout::portfolio(), store, false);
    assert_eq!(reloaded.state().theme, Theme::Dark);
}

// ============================================================================
// Email and contact form
// ============================================================================

#[test]
fn test_email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("First.Last@Example.ORG"));
    for invalid in ["a@b", "a b@c.com", "", "a@@b.com"] {
        assert!(!is_valid_email(invalid), "{invalid:?} should be rejected");
    }
}

#[test]
fn test_whitespace_only_field_rejected_without_delay() {
    let mut controller = portfolio_controller();
    controller.advance(ms(500));
    fill_contact_form(&mut controller, "Ada", "ada@example.com", "Hi", "   ");

    controller.handle_event(&PageEvent::Submit);
    assert!(!controller.state().loading_visible);

    controller.advance(ms(2000));
    let messages: Vec<_> = controller
        .notifications()
        .iter()
        .map(|n| (n.message.clone(), n.severity))
        .collect();
    assert_eq!(
        messages,
        vec![(MSG_MISSING_FIELDS.to_string(), Severity::Error)]
    );
    // Nothing was cleared
    assert_eq!(controller.registry().field_value(FormField::Name), "Ada");
}

#[test]
fn test_valid_submission_clears_fields_after_two_seconds() {
    let mut controller = portfolio_controller();
    controller.advance(ms(500));
    fill_contact_form(&mut controller, " Ada ", "ada@example.com", "Hi", "Hello");

    controller.handle_event(&click(ElementId::ContactSubmit));
    assert!(controller
        .registry()
        .has_class(ElementId::LoadingOverlay, CLASS_SHOW));

    controller.advance(ms(2000));
    assert!(!controller
        .registry()
        .has_class(ElementId::LoadingOverlay, CLASS_SHOW));
    let live: Vec<_> = controller.notifications().iter().collect();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].message, MSG_CONTACT_SENT);
    assert_eq!(live[0].severity, Severity::Success);
    for field in FormField::ALL {
        assert_eq!(controller.registry().field_value(field), "");
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_notifications_dismiss_on_their_own_clocks() {
    let mut controller = portfolio_controller();
    let first = controller.show_notification("first", Severity::Info);
    controller.advance(ms(2500));
    let second = controller.show_notification("second", Severity::Success);

    // first: hidden at 5000, removed at 5300
    controller.advance(ms(2800));
    assert!(!controller.registry().contains(ElementId::Notification(first)));
    assert!(controller.registry().contains(ElementId::Notification(second)));

    // second: removed at 2500 + 5300
    controller.advance(ms(2499));
    assert!(controller.registry().contains(ElementId::Notification(second)));
    controller.advance(ms(1));
    assert!(!controller.registry().contains(ElementId::Notification(second)));
}

#[test]
fn test_early_close_attempts_one_removal() {
    let mut controller = portfolio_controller();
    let id = controller.show_notification("bye", Severity::Info);
    controller.advance(ms(200));

    controller.handle_event(&click(ElementId::NotificationClose(id)));
    controller.run_until_idle();

    assert_eq!(
        controller.registry().removed_elements(),
        &[ElementId::Notification(id)]
    );
}

// ============================================================================
// Navigation and menu
// ============================================================================

#[test]
fn test_projects_section_marks_only_projects_link() {
    let mut controller = portfolio_controller();
    // 2850 + 100 lands inside projects [2800, 3600)
    controller.registry_mut().set_scroll_y(2850.0);
    controller.handle_event(&PageEvent::Scroll { y: 2850.0 });
    controller.advance(ms(16));

    let hrefs = controller.registry().nav_link_hrefs();
    let active: Vec<_> = (0..hrefs.len())
        .filter(|i| {
            controller
                .registry()
                .has_class(ElementId::NavLink(*i), CLASS_ACTIVE)
        })
        .map(|i| hrefs[i].as_str())
        .collect();
    assert_eq!(active, vec!["#projects"]);
}

#[test]
fn test_nav_click_from_open_menu() {
    let mut controller = portfolio_controller();
    controller.handle_event(&click(ElementId::MobileMenuToggle));
    assert!(controller.state().menu_open);

    controller.handle_event(&click(ElementId::NavLink(6)));
    assert!(!controller.state().menu_open);
    assert_eq!(controller.state().active_link, Some(6));
    assert_eq!(
        controller.registry().scroll_requests().last(),
        Some(&(4020.0, ScrollBehavior::Smooth))
    );
}

#[test]
fn test_two_menu_toggles_reset_bars() {
    let mut controller = portfolio_controller();
    controller.handle_event(&click(ElementId::MobileMenuToggle));
    controller.handle_event(&click(ElementId::MobileMenuToggle));

    let doc = controller.registry();
    assert!(!doc.has_class(ElementId::NavMenu, CLASS_SHOW));
    assert!(!doc.has_class(ElementId::MobileMenuToggle, CLASS_ACTIVE));
    assert_eq!(doc.style(ElementId::MenuBar(0), "transform"), Some("none"));
    assert_eq!(doc.style(ElementId::MenuBar(1), "opacity"), Some("1"));
    assert_eq!(doc.style(ElementId::MenuBar(2), "transform"), Some("none"));
}

#[test]
fn test_missing_cv_button_stops_wiring() {
    let mut controller = portfolio_controller();
    assert!(controller.wiring().download_cv);

    // Same page, but the CV button was never rendered
    let (mut doc, store) = controller.into_parts();
    doc.remove_element(ElementId::DownloadCv);
    controller = folio::controller::PageController::new(
        doc,
        store,
        folio::config::TimingConfig::default(),
    );
    assert!(!controller.initialize(&folio::theme::FixedColorScheme(false)));

    let wiring = controller.wiring();
    assert!(wiring.contact_form);
    assert!(!wiring.download_cv);
    assert!(!wiring.scroll);
}
