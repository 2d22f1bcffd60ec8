use url::Url;

use crate::app::config::ContentConfig;
use crate::error::{Error, Result};

pub const APPLICATION_DEADLINE: &str = "The deadline for applications is fast approaching. Ensure your place by applying before the 10th of July!";
pub const OPEN_DAY_BLURB: &str = "Our Open Day takes place on the 5th of August, reserve your place now to see what Gecko U has to offer!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeAction {
    StartConversation,
    SubmitApplication,
    RegisterForOpenDay,
    PlayVideo,
    OpenLink(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeItem {
    pub title: String,
    pub body: Option<String>,
    pub button: Option<String>,
    pub action: HomeAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutboundLink {
    pub label: String,
    pub url: Url,
}

/// Cards and links listed on the Home tab, top to bottom.
#[derive(Clone, Debug)]
pub struct HomeContent {
    institution: String,
    items: Vec<HomeItem>,
    video_url: Url,
    links: Vec<OutboundLink>,
}

impl HomeContent {
    pub fn from_config(content: &ContentConfig) -> Result<Self> {
        let video_url = Url::parse(&content.video_url)?;
        let links = content
            .links
            .iter()
            .map(|link| {
                if link.label.trim().is_empty() {
                    return Err(Error::validation(format!("Link {} has an empty label", link.url)));
                }
                Ok(OutboundLink {
                    label: link.label.clone(),
                    url: Url::parse(&link.url)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut items = vec![
            HomeItem {
                title: "Start a conversation".to_string(),
                body: None,
                button: None,
                action: HomeAction::StartConversation,
            },
            HomeItem {
                title: "Submit your application".to_string(),
                body: Some(APPLICATION_DEADLINE.to_string()),
                button: Some("Submit application".to_string()),
                action: HomeAction::SubmitApplication,
            },
            HomeItem {
                title: "Register for our Open Day".to_string(),
                body: Some(OPEN_DAY_BLURB.to_string()),
                button: Some("Reserve your place".to_string()),
                action: HomeAction::RegisterForOpenDay,
            },
            HomeItem {
                title: content.video_title.clone(),
                body: Some(video_url.to_string()),
                button: Some("Watch video".to_string()),
                action: HomeAction::PlayVideo,
            },
        ];
        items.extend(links.iter().enumerate().map(|(index, link)| HomeItem {
            title: link.label.clone(),
            body: None,
            button: None,
            action: HomeAction::OpenLink(index),
        }));

        Ok(Self {
            institution: content.institution.clone(),
            items,
            video_url,
            links,
        })
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn items(&self) -> &[HomeItem] {
        &self.items
    }

    pub fn links(&self) -> &[OutboundLink] {
        &self.links
    }

    pub fn video_url(&self) -> &Url {
        &self.video_url
    }

    /// External target for actions that leave the widget.
    pub fn url_for(&self, action: HomeAction) -> Option<&Url> {
        match action {
            HomeAction::PlayVideo => Some(&self.video_url),
            HomeAction::OpenLink(index) => self.links.get(index).map(|link| &link.url),
            _ => None,
        }
    }
}
