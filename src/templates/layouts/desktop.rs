use maud::{html, Markup, DOCTYPE};

use crate::auth::sessions::CurrentUser;

pub fn desktop_layout(title: &str, user: Option<&CurrentUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · EstateHub" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        h3 { "EstateHub" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Browse" } }
                            @if user.is_some() {
                                li { a href="/favorites" { "Favorites" } }
                                li { a href="/my-properties" { "My Properties" } }
                            }
                        }
                    }

                    @match user {
                        Some(u) => div class="session" {
                            span class="session-email" { (u.email) }
                            form method="post" action="/auth/logout" class="inline" {
                                button type="submit" class="link" { "Sign out" }
                            }
                        },
                        None => a href="/login" class="session-link" { "Sign in" },
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "© 2024 EstateHub. Find your dream home with us." }
                }
            }
        }
    }
}
