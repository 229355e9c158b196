use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::Utc;
use tracing::info;

use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions::{self, CurrentUser};
use crate::db::{auth as db_auth, favorites as db_favorites, properties as db_properties, Database};
use crate::domain::favorites::FavoriteSet;
use crate::domain::filter::{filter_listings, FilterState};
use crate::domain::validate::parse_new_listing;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{
    css_response, html_response, redirect_response, redirect_with_cookie, svg_response,
};
use crate::templates::components::card::{favorite_toggle, ToggleStyle};
use crate::templates::pages;

const MAIN_CSS: &str = include_str!("../static/main.css");
const PLACEHOLDER_SVG: &str = include_str!("../static/placeholder.svg");

pub fn handle(req: Request, db: &Database) -> ResultResp {
    // Pull everything we need out of the request head first, so POST
    // handlers are free to consume the body.
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let raw_query = req.uri().query().unwrap_or("").to_string();
    let cookie = req
        .headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let cookie = cookie.as_deref();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => browse(db, &raw_query, cookie),
        ("GET", "/login") => html_response(pages::login_page()),
        ("GET", "/favorites") => favorites(db, cookie),
        ("GET", "/my-properties") => my_properties(db, cookie),

        ("GET", "/auth/magic") => redeem_magic_link(db, &raw_query),
        ("POST", "/auth/request-link") => request_magic_link(db, read_form(req)?),
        ("POST", "/auth/logout") => logout(db, cookie),

        ("POST", "/properties") => create_listing(db, cookie, read_form(req)?),
        ("POST", "/properties/delete") => delete_listing(db, cookie, read_form(req)?),
        ("POST", "/favorites/toggle") => toggle_favorite(db, cookie, read_form(req)?),

        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/static/placeholder.svg") => svg_response(PLACEHOLDER_SVG),

        ("GET", p) if p.starts_with("/properties/") => {
            let id = p.trim_start_matches("/properties/").to_string();
            property_details(db, &id, cookie)
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Request plumbing

/// Decode an application/x-www-form-urlencoded body.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(parse_params(&raw))
}

/// Decode a query string / form body into key-value pairs.
fn parse_params(raw: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Resolve the session cookie to a signed-in user, if any. Every gated
/// action consumes the returned Option explicitly.
fn current_user(
    db: &Database,
    cookie: Option<&str>,
    now: i64,
) -> Result<Option<CurrentUser>, ServerError> {
    let Some(token) = sessions::token_from_cookie_header(cookie) else {
        return Ok(None);
    };
    db.with_conn(|conn| sessions::load_user_from_session(conn, &token, now))
}

// ---------------------------------------------------------------------------
// Listing views

fn browse(db: &Database, raw_query: &str, cookie: Option<&str>) -> ResultResp {
    let now = Utc::now().timestamp();
    let user = current_user(db, cookie, now)?;

    let filters = FilterState::from_params(&parse_params(raw_query))?;
    let listings = db_properties::all_listings(db)?;
    let filtered = filter_listings(&listings, &filters);

    let favorites = FavoriteSet::load(db, user.as_ref().map(|u| u.id))?;

    html_response(pages::home_page(
        user.as_ref(),
        &filtered,
        &filters,
        &favorites,
    ))
}

fn property_details(db: &Database, id: &str, cookie: Option<&str>) -> ResultResp {
    let now = Utc::now().timestamp();
    let user = current_user(db, cookie, now)?;

    let listing = db_properties::listing_by_id(db, id)?.ok_or(ServerError::NotFound)?;

    let favorites = FavoriteSet::load(db, user.as_ref().map(|u| u.id))?;
    let is_favorite = favorites.contains(&listing.id);

    html_response(pages::property_details_page(
        user.as_ref(),
        &listing,
        is_favorite,
    ))
}

fn favorites(db: &Database, cookie: Option<&str>) -> ResultResp {
    let now = Utc::now().timestamp();
    let Some(user) = current_user(db, cookie, now)? else {
        return redirect_response("/login");
    };

    let listings = db_favorites::listings_for_user(db, user.id)?;
    html_response(pages::favorites_page(&user, &listings))
}

fn my_properties(db: &Database, cookie: Option<&str>) -> ResultResp {
    let now = Utc::now().timestamp();
    let Some(user) = current_user(db, cookie, now)? else {
        return redirect_response("/login");
    };

    let listings = db_properties::listings_by_owner(db, user.id)?;
    html_response(pages::my_properties_page(&user, &listings))
}

// ---------------------------------------------------------------------------
// Listing mutations

fn create_listing(
    db: &Database,
    cookie: Option<&str>,
    form: HashMap<String, String>,
) -> ResultResp {
    let now = Utc::now();
    let Some(user) = current_user(db, cookie, now.timestamp())? else {
        return redirect_response("/login");
    };

    // Validation happens before anything reaches the store.
    let new = parse_new_listing(&form)?;
    let listing = db_properties::insert_listing(db, user.id, &new, false, now.naive_utc())?;
    info!(listing_id = %listing.id, user_id = user.id, "listing created");

    redirect_response("/my-properties")
}

fn delete_listing(
    db: &Database,
    cookie: Option<&str>,
    form: HashMap<String, String>,
) -> ResultResp {
    let now = Utc::now().timestamp();
    let Some(user) = current_user(db, cookie, now)? else {
        return redirect_response("/login");
    };

    let id = form
        .get("id")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing listing id".into()))?;

    // The store enforces ownership; a Forbidden here means the client-side
    // gate was bypassed or stale.
    db_properties::delete_owned(db, id, user.id)?;
    info!(listing_id = %id, user_id = user.id, "listing deleted");

    redirect_response("/my-properties")
}

fn toggle_favorite(
    db: &Database,
    cookie: Option<&str>,
    form: HashMap<String, String>,
) -> ResultResp {
    let now = Utc::now().timestamp();
    let Some(user) = current_user(db, cookie, now)? else {
        // Favorite actions require a signed-in user.
        return redirect_response("/login");
    };

    let property_id = form
        .get("property_id")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing property id".into()))?;
    let style = ToggleStyle::from_param(form.get("style").map(String::as_str).unwrap_or(""));

    let outcome = db_favorites::toggle(db, user.id, property_id, now)?;
    let is_favorite = outcome == db_favorites::ToggleOutcome::Added;

    // Swap the control in place with the confirmed state.
    html_response(favorite_toggle(property_id, is_favorite, style))
}

// ---------------------------------------------------------------------------
// Auth flow

fn request_magic_link(db: &Database, form: HashMap<String, String>) -> ResultResp {
    let email = form
        .get("email")
        .ok_or_else(|| ServerError::BadRequest("missing email".into()))?;

    let service = MagicLinkService::new(MagicLinkConfig::default());
    let now = Utc::now().timestamp();

    let issued = db.with_conn(|conn| service.request_link(conn, email, now))?;

    // Mail delivery is out of scope; the link lands in the server log.
    info!(user_id = issued.user_id, link = %issued.link, "magic link issued");

    html_response(pages::check_email_content(&issued.email))
}

fn redeem_magic_link(db: &Database, raw_query: &str) -> ResultResp {
    let params = parse_params(raw_query);
    let token = params.get("token").map(String::as_str).unwrap_or("");

    let service = MagicLinkService::new(MagicLinkConfig::default());
    let now = Utc::now().timestamp();

    let session_token = db.with_conn(|conn| {
        let redeemed = service.redeem(conn, token, now)?;
        db_auth::touch_last_login(conn, redeemed.user_id, now)?;
        let session_token = sessions::create_session(conn, redeemed.user_id, now)?;
        info!(user_id = redeemed.user_id, email = %redeemed.email, "signed in");
        Ok(session_token)
    })?;

    redirect_with_cookie("/", &sessions::session_cookie(&session_token))
}

fn logout(db: &Database, cookie: Option<&str>) -> ResultResp {
    let now = Utc::now().timestamp();
    if let Some(token) = sessions::token_from_cookie_header(cookie) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/", &sessions::clear_session_cookie())
}
