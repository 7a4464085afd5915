//! Server-injected page globals and login wire DTOs.
//!
//! DESIGN
//! ======
//! The host serializes one JSON document into the page and both the SSR
//! pass and the hydrating client deserialize the same bytes, so the two
//! renders start from identical state. Website keys are PascalCase because
//! the host emits its configuration structs without renaming; null lists
//! and maps from the host decode as empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::GlobalsError;
use crate::state::table::ListingProps;
use crate::util::i18n::Translations;

/// DOM id of the `<script type="application/json">` carrying [`SiteGlobals`].
pub const GLOBALS_ELEMENT_ID: &str = "site-globals";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// SESSION RECORD
// =============================================================================

/// User identifier as stored by the host (numeric or string keys).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Signed-in user record. Unknown fields are kept so that saving the record
/// back to storage is lossless.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// User name, else email.
    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() { &self.email } else { &self.user_name }
    }

    /// Uppercased first character of the user name, for avatar placeholders.
    pub fn avatar_initial(&self) -> String {
        self.user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Avatar image URL, ignoring blank values.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

// =============================================================================
// WEBSITE CONFIGURATION
// =============================================================================

/// Sign-in method offered in the login modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAuthProvider", into = "RawAuthProvider")]
pub enum AuthProvider {
    Mail,
    Github { client_id: String, redirect_uri: String },
    Google { client_id: String },
    Generic { name: String },
}

const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

impl AuthProvider {
    pub fn name(&self) -> &str {
        match self {
            Self::Mail => "mail",
            Self::Github { .. } => "github",
            Self::Google { .. } => "google",
            Self::Generic { name } => name,
        }
    }

    /// OAuth authorize URL for GitHub providers.
    pub fn github_authorize_url(&self) -> Option<String> {
        let Self::Github { client_id, redirect_uri } = self else {
            return None;
        };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", "user")
            .finish();
        Some(format!("{GITHUB_AUTHORIZE_URL}?{query}"))
    }
}

#[derive(Serialize, Deserialize)]
struct RawAuthProvider {
    #[serde(rename = "Provider", default)]
    provider: String,
    #[serde(rename = "ClientID", default, deserialize_with = "null_as_default")]
    client_id: String,
    #[serde(rename = "RedirectURI", alias = "CallbackURL", default, deserialize_with = "null_as_default")]
    redirect_uri: String,
}

impl From<RawAuthProvider> for AuthProvider {
    fn from(raw: RawAuthProvider) -> Self {
        match raw.provider.to_ascii_lowercase().as_str() {
            "mail" => Self::Mail,
            "github" => Self::Github {
                client_id: raw.client_id,
                redirect_uri: raw.redirect_uri,
            },
            "google" => Self::Google { client_id: raw.client_id },
            _ => Self::Generic { name: raw.provider },
        }
    }
}

impl From<AuthProvider> for RawAuthProvider {
    fn from(provider: AuthProvider) -> Self {
        let name = provider.name().to_owned();
        let (client_id, redirect_uri) = match provider {
            AuthProvider::Github { client_id, redirect_uri } => (client_id, redirect_uri),
            AuthProvider::Google { client_id } => (client_id, String::new()),
            AuthProvider::Mail | AuthProvider::Generic { .. } => (String::new(), String::new()),
        };
        Self {
            provider: name,
            client_id,
            redirect_uri,
        }
    }
}

/// Site-wide configuration injected by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Website {
    /// Default language; paths in this language carry no language segment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub support_lang: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang_map: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth_provider: Vec<AuthProvider>,
}

impl Website {
    pub fn mail_provider(&self) -> Option<&AuthProvider> {
        self.auth_provider.iter().find(|p| matches!(p, AuthProvider::Mail))
    }

    /// Every provider except mail, in configured order.
    pub fn other_providers(&self) -> impl Iterator<Item = &AuthProvider> {
        self.auth_provider.iter().filter(|p| !matches!(p, AuthProvider::Mail))
    }
}

// =============================================================================
// LAYOUT CONTENT
// =============================================================================

/// Header navigation entry from `root.header.nav`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Only shown to signed-in viewers.
    #[serde(default, alias = "IsLogin")]
    pub is_login: bool,
}

impl NavItem {
    pub fn is_visible(&self, authenticated: bool) -> bool {
        !self.is_login || authenticated
    }
}

/// `root.header` translation namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nav: Vec<NavItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl FooterLink {
    /// In-page anchors stay in the tab; everything else opens a new one.
    pub fn target(&self) -> &'static str {
        if self.url.starts_with('#') { "_self" } else { "_blank" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl SocialLink {
    /// Visible label: the icon name when set, else the text.
    pub fn label(&self) -> &str {
        if self.icon.is_empty() { &self.text } else { &self.icon }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<FooterLink>,
}

/// `root.footer` translation namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social: Vec<SocialLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<LinkGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copyright: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy: Vec<FooterLink>,
}

// =============================================================================
// PAGE GLOBALS
// =============================================================================

/// Props for the page body rendered inside the site frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageProps {
    #[default]
    Blank,
    Listing(ListingProps),
}

/// Everything the host injects into a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteGlobals {
    #[serde(default)]
    pub translations: Translations,
    #[serde(default)]
    pub website: Website,
    #[serde(default)]
    pub user: Option<User>,
    /// Active language code for this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(default)]
    pub page: PageProps,
}

impl SiteGlobals {
    /// Parse the injected JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GlobalsError::Malformed`] if the document is not valid JSON
    /// of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, GlobalsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// JSON safe to embed inside a `<script>` element.
    pub fn to_script_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json.replace('<', "\\u003c"),
            Err(e) => {
                log::error!("failed to serialize site globals: {e}");
                "{}".to_owned()
            }
        }
    }

    /// Read the globals element written by the SSR shell.
    ///
    /// # Errors
    ///
    /// Returns [`GlobalsError::Missing`] if the element is absent and
    /// [`GlobalsError::Malformed`] if its content does not parse.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self, GlobalsError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(GLOBALS_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(GlobalsError::Missing(GLOBALS_ELEMENT_ID))?;
        Self::from_json(&raw)
    }
}

// =============================================================================
// REQUEST / RESPONSE BODIES
// =============================================================================

/// Body of `POST /login/mail`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MailLoginRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        #[serde(rename = "verificationCode")]
        verification_code: String,
    },
}

/// Body of `POST /login/send-verification-code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationCodeRequest {
    pub email: String,
}

/// `{message}` envelope used by the login endpoints for status and errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}
