use civic_authz::{Permission, Requirement, Role};
use civic_console::app::build_state;
use civic_console::config::ConsoleConfig;
use civic_console::guard::RouteDecision;
use civic_console::navigation::NAVIGATION;
use civic_console::session::SessionUser;

const ME_RESPONSE: &str = r#"{
    "user": {
        "id": 42,
        "email": "cm@example.org",
        "full_name": "Cam Manager",
        "role": "campaign_manager",
        "organization_id": 9,
        "is_active": true
    }
}"#;

#[test]
fn campaign_manager_session_end_to_end() {
    let state = build_state(ConsoleConfig::default());
    let user = SessionUser::from_json(ME_RESPONSE).expect("session");
    let guard = state.route_guard();
    let gate = state.action_gate();

    let nav: Vec<_> = state
        .navigation(user.active_role())
        .into_iter()
        .map(|item| item.href)
        .collect();
    assert_eq!(
        nav,
        vec![
            "/dashboard",
            "/dashboard/campaigns",
            "/dashboard/ai-agents",
            "/dashboard/analytics"
        ]
    );

    assert_eq!(
        guard.decide(Some(&user), "/dashboard/campaigns"),
        RouteDecision::Render
    );
    assert_eq!(
        guard.decide(Some(&user), "/dashboard/users"),
        RouteDecision::Redirect {
            to: "/dashboard".to_string()
        }
    );

    assert!(gate.allows(
        Some(&user),
        &Requirement::Permission(Permission::CreateCampaigns)
    ));
    assert!(!gate.allows(
        Some(&user),
        &Requirement::Permission(Permission::DeleteCampaigns)
    ));
    assert!(gate.allows(
        Some(&user),
        &Requirement::AllOf(vec![Permission::ViewContent, Permission::CreateContent])
    ));
}

#[test]
fn every_visible_nav_item_routes_to_render() {
    let state = build_state(ConsoleConfig::default());
    let guard = state.route_guard();
    for role in Role::ALL {
        let user = SessionUser::with_role(role.as_str());
        let visible = state.navigation(Some(role.as_str()));
        for item in NAVIGATION.iter() {
            let decision = guard.decide(Some(&user), item.href);
            let shown = visible.iter().any(|candidate| candidate.href == item.href);
            assert_eq!(
                decision == RouteDecision::Render,
                shown,
                "{role} {}",
                item.href
            );
        }
    }
}

#[test]
fn custom_routes_from_config() {
    let state = build_state(ConsoleConfig::new("/signin/", "/dashboard").expect("config"));
    let guard = state.route_guard();
    assert_eq!(guard.decide(None, "/signin"), RouteDecision::Render);
    assert_eq!(guard.decide(None, "/signin/"), RouteDecision::Render);
    assert_eq!(
        guard.decide(None, "/dashboard"),
        RouteDecision::Redirect {
            to: "/signin".to_string()
        }
    );
    let viewer = SessionUser::with_role("viewer");
    assert_eq!(
        guard.decide(Some(&viewer), "/dashboard/users"),
        RouteDecision::Redirect {
            to: "/dashboard".to_string()
        }
    );
    assert_eq!(
        guard.decide(Some(&viewer), "/"),
        RouteDecision::Redirect {
            to: "/dashboard".to_string()
        }
    );
}

#[test]
fn restricted_landing_route_is_rejected() {
    assert!(ConsoleConfig::new("/login", "/dashboard/users").is_err());
    assert!(ConsoleConfig::new("/dashboard/campaigns", "/dashboard").is_err());
}

#[test]
fn gate_parameters_follow_precedence() {
    let state = build_state(ConsoleConfig::default());
    let gate = state.action_gate();
    let analyst = SessionUser::with_role("analyst");

    // Single permission wins over the lists.
    let requirement = Requirement::parse_parts(
        Some("create_campaigns"),
        &["view_analytics"],
        &["view_analytics"],
    )
    .expect("parse");
    assert!(!gate.allows(Some(&analyst), &requirement));

    // Empty lists with no single permission leave the element unrestricted.
    let none: [&str; 0] = [];
    let requirement = Requirement::parse_parts(None, &none, &none).expect("parse");
    assert_eq!(requirement, Requirement::Unrestricted);
    assert!(gate.allows(Some(&analyst), &requirement));
}
