//! Built-in reference data: common email provider domains and the typo lookup table.
//!
//! Both tables are immutable. They are materialized once into a
//! [`ReferenceData`] on first use and shared by every suggester that does not
//! load its own data.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DomainfixError, Result};

/// Common email provider domains, in the order they are scored.
///
/// Order matters: block-match ties and the edit-distance scorer both resolve
/// to the earliest entry.
pub const MOST_COMMON_DOMAINS: &[&str] = &[
    "mailgun.net",
    "163.com",
    "aim.com",
    "alice.it",
    "aol.co.uk",
    "aol.com",
    "att.net",
    "azet.sk",
    "bell.net",
    "bellsouth.net",
    "bigpond.com",
    "bigpond.com.au",
    "bigpond.net.au",
    "bluewin.ch",
    "blueyonder.co.uk",
    "bol.com.br",
    "btinternet.com",
    "btopenworld.com",
    "cableone.net",
    "centrum.sk",
    "centurylink.net",
    "centurytel.net",
    "charter.net",
    "comcast.net",
    "cox.net",
    "cs.com",
    "earthlink.net",
    "email.com",
    "email.cz",
    "email.it",
    "embarqmail.com",
    "excite.com",
    "fastwebnet.it",
    "free.fr",
    "freemail.hu",
    "freenet.de",
    "frontier.com",
    "frontiernet.net",
    "fuse.net",
    "gmail.com",
    "gmx.at",
    "gmx.ch",
    "gmx.com",
    "gmx.de",
    "gmx.net",
    "google.com",
    "googlemail.com",
    "hanmail.net",
    "home.nl",
    "hotmail.be",
    "hotmail.ca",
    "hotmail.co.jp",
    "hotmail.co.nz",
    "hotmail.co.uk",
    "hotmail.com",
    "hotmail.com.ar",
    "hotmail.com.au",
    "hotmail.de",
    "hotmail.es",
    "hotmail.fr",
    "hotmail.gr",
    "hotmail.it",
    "hotmail.nl",
    "hotmail.no",
    "hotmail.se",
    "hughes.net",
    "icloud.com",
    "iinet.net.au",
    "inbox.lv",
    "inbox.ru",
    "interia.pl",
    "juno.com",
    "laposte.net",
    "libero.it",
    "list.ru",
    "live.be",
    "live.ca",
    "live.co.uk",
    "live.com",
    "live.com.ar",
    "live.com.au",
    "live.com.mx",
    "live.de",
    "live.dk",
    "live.fr",
    "live.it",
    "live.nl",
    "live.no",
    "live.se",
    "mac.com",
    "mail.com",
    "mail.ru",
    "me.com",
    "microsoft.com",
    "mindspring.com",
    "msn.com",
    "naver.com",
    "netscape.net",
    "netspace.net.au",
    "netzero.com",
    "netzero.net",
    "neuf.fr",
    "nhs.net",
    "ntlworld.com",
    "o2.pl",
    "online.no",
    "optimum.net",
    "optonline.net",
    "optusnet.com.au",
    "orange.fr",
    "ostrovok.ru",
    "outlook.com",
    "outlook.com.au",
    "outlook.de",
    "outlook.es",
    "outlook.fr",
    "outlook.it",
    "pacbell.net",
    "planet.nl",
    "prodigy.net",
    "prodigy.net.mx",
    "protonmail.com",
    "q.com",
    "qq.com",
    "rambler.ru",
    "reagan.com",
    "rediffmail.com",
    "roadrunner.com",
    "rocketmail.com",
    "rogers.com",
    "sbcglobal.net",
    "seznam.cz",
    "sfr.fr",
    "shaw.ca",
    "sky.com",
    "skynet.be",
    "suddenlink.net",
    "swbell.net",
    "sympatico.ca",
    "t-online.de",
    "talktalk.net",
    "telefonica.net",
    "telenet.be",
    "telfort.nl",
    "telia.com",
    "telus.net",
    "telusplanet.net",
    "tiscali.co.uk",
    "tiscali.it",
    "ukr.net",
    "uol.com.br",
    "usa.net",
    "vepl.com",
    "verizon.net",
    "videotron.ca",
    "virgilio.it",
    "virgin.net",
    "virginmedia.com",
    "wanadoo.fr",
    "web.de",
    "windowslive.com",
    "windstream.net",
    "wp.pl",
    "xs4all.nl",
    "xtra.co.nz",
    "y7mail.com",
    "ya.ru",
    "yahoo.ca",
    "yahoo.co.id",
    "yahoo.co.in",
    "yahoo.co.jp",
    "yahoo.co.nz",
    "yahoo.co.uk",
    "yahoo.com",
    "yahoo.com.ar",
    "yahoo.com.au",
    "yahoo.com.br",
    "yahoo.com.hk",
    "yahoo.com.mx",
    "yahoo.com.my",
    "yahoo.com.ph",
    "yahoo.com.sg",
    "yahoo.com.tw",
    "yahoo.de",
    "yahoo.es",
    "yahoo.fr",
    "yahoo.gr",
    "yahoo.ie",
    "yahoo.in",
    "yahoo.it",
    "yahoo.no",
    "yahoo.se",
    "yandex.com",
    "yandex.ru",
    "ymail.com",
    "ziggo.nl",
    "zoominternet.net",
];

/// Truncated provider names that the fuzzy scorers do not fix on their own.
pub const LOOKUP_TABLE: &[(&str, &str)] = &[
    ("yahoo", "yahoo.com"),
    ("gmail", "gmail.com"),
    ("hotmail", "hotmail.com"),
    ("live", "live.com"),
    ("outlook", "outlook.com"),
    ("msn", "msn.com"),
    ("googlemail", "googlemail.com"),
    ("aol", "aol.com"),
    ("aim", "aim.com"),
    ("icloud", "icloud.com"),
    ("me", "me.com"),
    ("mac", "mac.com"),
    ("facebook", "facebook.com"),
    ("comcast", "comcast.net"),
    ("sbcglobal", "sbcglobal.net"),
    ("bellsouth", "bellsouth.net"),
    ("verizon", "verizon.net"),
    ("earthlink", "earthlink.net"),
    ("cox", "cox.net"),
    ("charter", "charter.net"),
    ("shaw", "shaw.ca"),
    ("bell", "bell.net"),
];

static BUILTIN: LazyLock<ReferenceData> = LazyLock::new(|| ReferenceData {
    domains: MOST_COMMON_DOMAINS.iter().map(|&d| d.to_string()).collect(),
    lookup: LOOKUP_TABLE
        .iter()
        .map(|&(typo, domain)| (typo.to_string(), domain.to_string()))
        .collect(),
});

/// Reference domains plus the exact-match typo table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Known-good domains, in scoring order.
    pub domains: Vec<String>,
    /// Exact typo to canonical domain mapping. Keys are case-sensitive.
    #[serde(default)]
    pub lookup: AHashMap<String, String>,
}

impl ReferenceData {
    /// Create reference data from explicit parts.
    pub fn new(domains: Vec<String>, lookup: AHashMap<String, String>) -> Self {
        ReferenceData { domains, lookup }
    }

    /// The built-in provider list and lookup table.
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    /// Load reference data from a JSON document of the form
    /// `{"domains": [...], "lookup": {...}}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let data = Self::from_json(&content)?;
        log::debug!(
            "loaded {} domains and {} lookup entries from {}",
            data.domains.len(),
            data.lookup.len(),
            path.display()
        );
        Ok(data)
    }

    /// Parse reference data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Load a plain domain list, one domain per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn load_domain_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    /// Look up an exact typo.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.lookup.get(word).map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if self.domains.iter().any(|d| d.is_empty()) {
            return Err(DomainfixError::invalid_config(
                "reference domains must not be empty strings",
            ));
        }
        if let Some((typo, _)) = self.lookup.iter().find(|(_, domain)| domain.is_empty()) {
            return Err(DomainfixError::invalid_config(format!(
                "lookup entry '{typo}' maps to an empty domain"
            )));
        }
        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
