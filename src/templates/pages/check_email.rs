use maud::{html, Markup};

/// Returns the partial HTML content for the success message.
/// Used for HTMX swaps to replace the login form.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="check-email" {
            h3 { "Check your email" }

            p {
                "We sent a sign-in link to "
                strong { (email) }
                "."
            }
            p { "Click the link in the email to sign in." }

            a href="/login" { "Try with a different email" }
        }
    }
}
