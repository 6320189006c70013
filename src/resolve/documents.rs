//! JSON-LD document each page publishes.

use super::PageContent;
use crate::config::SiteConfig;
use crate::page::USERS_PATH;
use crate::seo::schema::{
    self, OrganizationInput, PersonInput, StructuredDataDocument, WebSiteInput,
};
use crate::store::User;

/// Structured data for a page, `None` for pages that publish none.
pub fn page_document(content: &PageContent, config: &SiteConfig) -> Option<StructuredDataDocument> {
    let site = &config.site;
    let home_url = config.resolve_url("");
    let users_url = config.resolve_url(USERS_PATH);

    let document = match content {
        PageContent::Home => schema::website(&WebSiteInput {
            name: &site.name,
            url: &home_url,
            description: Some(site.description.as_str()),
            search_url: None,
        }),
        PageContent::UserList(_) => schema::breadcrumb_list(&[
            ("Home", Some(home_url.as_str())),
            ("Users", Some(users_url.as_str())),
        ]),
        PageContent::UserDetail(user) => person(user, config),
        PageContent::About => schema::organization(&OrganizationInput {
            name: &site.name,
            url: Some(home_url.as_str()),
            logo: site.logo.as_deref(),
            description: Some(site.description.as_str()),
            same_as: &site.same_as,
        }),
        PageContent::NotFound => return None,
    };
    Some(document)
}

fn person(user: &User, config: &SiteConfig) -> StructuredDataDocument {
    let url = config.resolve_url(&format!("{USERS_PATH}/{}", user.id));
    let same_as: Vec<String> = user
        .website
        .iter()
        .chain(&user.social)
        .cloned()
        .collect();

    schema::person(&PersonInput {
        name: &user.name,
        url: Some(url.as_str()),
        image: user.avatar(),
        job_title: user.job_title(),
        company: user.company(),
        location: user.location(),
        email: None,
        same_as: &same_as,
        knows_about: &user.skills,
    })
}
