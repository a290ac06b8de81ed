//! Admin login form and landing page.

use maud::{html, Markup};

use super::base_document;

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginView<'a> {
    pub admin_prefix: &'a str,
    pub site_name: &'a str,
    pub username: &'a str,
    pub next: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn login_page(view: &LoginView<'_>) -> Markup {
    let title = format!("Log in | {} administration", view.site_name);
    base_document(
        &title,
        Some("admin"),
        html! {
            main.admin-login {
                h1 { (view.site_name) " administration" }
                @if let Some(error) = view.error {
                    p.admin-login__error role="alert" { (error) }
                }
                form method="post" action={ (view.admin_prefix) "/login/" } {
                    @if let Some(next) = view.next {
                        input type="hidden" name="next" value=(next);
                    }
                    label for="username" { "Username" }
                    input #username type="text" name="username" value=(view.username) autocomplete="username" required autofocus;
                    label for="password" { "Password" }
                    input #password type="password" name="password" autocomplete="current-password" required;
                    button type="submit" { "Log in" }
                }
            }
        },
    )
}

/// Signed-in landing page with pointers into the JSON API.
pub fn admin_landing(
    site_name: &str,
    admin_prefix: &str,
    username: &str,
    new_submissions: i64,
) -> Markup {
    let api = format!("{}/api", admin_prefix);
    let endpoints = [
        ("About sections", "about"),
        ("Contact information", "contact-info"),
        ("Services", "services"),
        ("Projects", "projects"),
        ("Gallery", "gallery"),
        ("Contact submissions", "submissions"),
    ];

    base_document(
        &format!("{} administration", site_name),
        Some("admin"),
        html! {
            main.admin-home {
                header {
                    h1 { (site_name) " administration" }
                    p { "Signed in as " strong { (username) } }
                    form method="post" action={ (admin_prefix) "/logout/" } {
                        button type="submit" { "Log out" }
                    }
                }
                p.admin-home__inbox {
                    @if new_submissions == 1 {
                        "1 new contact submission."
                    } @else {
                        (new_submissions) " new contact submissions."
                    }
                }
                ul.admin-home__endpoints {
                    @for (label, path) in endpoints {
                        li { a href={ (api) "/" (path) } { (label) } }
                    }
                }
            }
        },
    )
}
