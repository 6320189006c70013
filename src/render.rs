//! Server-rendered HTML documents.
//!
//! The head comes from the navigator's [`HeadTagSet`]; the body is a minimal
//! view of the resolved page content.

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::head::HeadTagSet;
use crate::navigator::{Navigator, Outcome};
use crate::page::{Route, USERS_PATH};
use crate::resolve::PageContent;
use crate::store::{EntityStore, User};
use crate::utils::html::{escape, escape_attr};

/// A page rendered for one request.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: u16,
    /// Managed head elements, one per line.
    pub head: String,
    pub html: String,
}

/// Navigate a fresh document to `url` and render it.
///
/// Missing pages render with not-found metadata and status 404.
pub async fn render_page<S: EntityStore>(url: &str, config: &SiteConfig, store: &S) -> RenderedPage {
    let route = Route::parse(url);
    let mut navigator = Navigator::new();

    let (status, content) = match navigator.navigate(&route, config, store).await {
        Outcome::Rendered(content) => (200, content),
        // A fresh navigator has nothing that could abandon it.
        Outcome::NotFound | Outcome::Abandoned => (404, PageContent::NotFound),
    };

    let head = navigator.head();
    RenderedPage {
        status,
        head: head.render_html(),
        html: render_document(head, &content, config),
    }
}

/// Full HTML document for a page.
pub fn render_document(head: &HeadTagSet, content: &PageContent, config: &SiteConfig) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", html_lang(&config.site.locale));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let tags = head.render_html();
    if !tags.is_empty() {
        html.push_str(&tags);
        html.push('\n');
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&nav(config));
    html.push_str("<main>\n");
    html.push_str(&body(content, config));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// `en_US` -> `en-US`
fn html_lang(locale: &str) -> String {
    match locale.trim() {
        "" => "en".to_string(),
        locale => locale.replace('_', "-"),
    }
}

fn nav(config: &SiteConfig) -> String {
    format!(
        "<nav><a href=\"/\">{}</a> <a href=\"/{USERS_PATH}\">Users</a> <a href=\"/about\">About</a></nav>\n",
        escape(&config.site.name)
    )
}

fn body(content: &PageContent, config: &SiteConfig) -> String {
    let site = &config.site;
    let mut html = String::new();

    match content {
        PageContent::Home => {
            let _ = writeln!(html, "<h1>{}</h1>", escape(&site.name));
            let _ = writeln!(html, "<p>{}</p>", escape(&site.tagline));
            let _ = writeln!(html, "<p>{}</p>", escape(&site.description));
        }
        PageContent::UserList(users) => {
            html.push_str("<h1>All Users</h1>\n<ul>\n");
            for user in users {
                html.push_str(&user_item(user));
            }
            html.push_str("</ul>\n");
        }
        PageContent::UserDetail(user) => html.push_str(&profile(user)),
        PageContent::About => {
            html.push_str("<h1>About</h1>\n");
            let _ = writeln!(
                html,
                "<p>{} renders every page on the server, so crawlers and link previews \
                 receive complete metadata without running scripts.</p>",
                escape(&site.name)
            );
        }
        PageContent::NotFound => {
            html.push_str("<h1>Page Not Found</h1>\n");
            html.push_str("<p>The page you are looking for does not exist.</p>\n");
            html.push_str("<p><a href=\"/\">Back to home</a></p>\n");
        }
    }
    html
}

fn user_item(user: &User) -> String {
    let mut item = format!(
        "<li><a href=\"/{USERS_PATH}/{}\">{}</a>",
        user.id,
        escape(&user.name)
    );
    if let Some(job) = user.job_title() {
        let _ = write!(item, " - {}", escape(job));
    }
    item.push_str("</li>\n");
    item
}

fn profile(user: &User) -> String {
    let mut html = String::from("<article>\n");

    if let Some(avatar) = user.avatar() {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\" width=\"150\" height=\"150\">",
            escape_attr(avatar),
            escape_attr(&user.name)
        );
    }
    let _ = writeln!(html, "<h1>{}</h1>", escape(&user.name));

    let role = match (user.job_title(), user.company()) {
        (Some(job), Some(company)) => Some(format!("{job} at {company}")),
        (Some(job), None) => Some(job.to_string()),
        (None, Some(company)) => Some(company.to_string()),
        (None, None) => None,
    };
    if let Some(role) = role {
        let _ = writeln!(html, "<p>{}</p>", escape(&role));
    }
    if let Some(location) = user.location() {
        let _ = writeln!(html, "<p>{}</p>", escape(location));
    }
    if let Some(bio) = user.bio() {
        let _ = writeln!(html, "<p>{}</p>", escape(bio));
    }
    if !user.skills.is_empty() {
        html.push_str("<ul>\n");
        for skill in &user.skills {
            let _ = writeln!(html, "<li>{}</li>", escape(skill));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</article>\n");
    html
}
