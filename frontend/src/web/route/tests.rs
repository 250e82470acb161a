use super::*;

#[test]
fn path_round_trip() {
    for route in [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::ClientDashboard,
        AppRoute::ArtistDashboard,
        AppRoute::AdminDashboard,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::NotFound);
}

#[test]
fn unknown_session_waits_on_guarded_routes() {
    assert_eq!(
        guard(AppRoute::ClientDashboard, SessionView::Unknown),
        GuardOutcome::Wait
    );
    assert_eq!(guard(AppRoute::Login, SessionView::Unknown), GuardOutcome::Wait);
    // Public routes render regardless of session state.
    assert_eq!(
        guard(AppRoute::NotFound, SessionView::Unknown),
        GuardOutcome::Render
    );
}

#[test]
fn anonymous_is_sent_to_login() {
    for route in [
        AppRoute::ClientDashboard,
        AppRoute::ArtistDashboard,
        AppRoute::AdminDashboard,
    ] {
        assert_eq!(
            guard(route, SessionView::Anonymous),
            GuardOutcome::Redirect(AppRoute::Login)
        );
    }
    assert_eq!(guard(AppRoute::Login, SessionView::Anonymous), GuardOutcome::Render);
    assert_eq!(
        guard(AppRoute::Register, SessionView::Anonymous),
        GuardOutcome::Render
    );
}

#[test]
fn role_mismatch_redirects_to_own_landing_route() {
    // An artist hitting the admin-only dashboard lands on the artist
    // dashboard, not on the login page and not on an error page.
    assert_eq!(
        guard(
            AppRoute::AdminDashboard,
            SessionView::Authenticated(UserType::Artist)
        ),
        GuardOutcome::Redirect(AppRoute::ArtistDashboard)
    );
    assert_eq!(
        guard(
            AppRoute::ArtistDashboard,
            SessionView::Authenticated(UserType::Client)
        ),
        GuardOutcome::Redirect(AppRoute::ClientDashboard)
    );
    assert_eq!(
        guard(
            AppRoute::ClientDashboard,
            SessionView::Authenticated(UserType::Admin)
        ),
        GuardOutcome::Redirect(AppRoute::AdminDashboard)
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        guard(
            AppRoute::AdminDashboard,
            SessionView::Authenticated(UserType::Admin)
        ),
        GuardOutcome::Render
    );
    assert_eq!(
        guard(
            AppRoute::ClientDashboard,
            SessionView::Authenticated(UserType::Client)
        ),
        GuardOutcome::Render
    );
}

#[test]
fn authenticated_users_leave_public_only_routes() {
    assert_eq!(
        guard(AppRoute::Login, SessionView::Authenticated(UserType::Artist)),
        GuardOutcome::Redirect(AppRoute::ArtistDashboard)
    );
    assert_eq!(
        guard(
            AppRoute::Register,
            SessionView::Authenticated(UserType::Client)
        ),
        GuardOutcome::Redirect(AppRoute::ClientDashboard)
    );
}
