use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// External job-listing providers Jobhub knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Remotive,
    Arbeitnow,
    JSearch,
}

impl JobSource {
    pub const ALL: [JobSource; 3] = [JobSource::Remotive, JobSource::Arbeitnow, JobSource::JSearch];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobSource::Remotive => "remotive",
            JobSource::Arbeitnow => "arbeitnow",
            JobSource::JSearch => "jsearch",
        }
    }

    /// Name stamped into `CanonicalJob::source` by providers that are not metasearch engines.
    pub fn display_name(&self) -> &'static str {
        match self {
            JobSource::Remotive => "Remotive",
            JobSource::Arbeitnow => "Arbeitnow",
            JobSource::JSearch => "JSearch",
        }
    }

    pub fn logo(&self) -> &'static str {
        match self {
            JobSource::Remotive => "https://remotive.com/favicon.ico",
            JobSource::Arbeitnow => "https://www.arbeitnow.com/favicon.ico",
            JobSource::JSearch => "https://rapidapi.com/favicon.ico",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            JobSource::Remotive => "Remote jobs in software, design, marketing and more",
            JobSource::Arbeitnow => "Jobs in Europe, many with visa sponsorship or remote options",
            JobSource::JSearch => "Listings aggregated from LinkedIn, Indeed, Glassdoor and other boards",
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remotive" => Ok(JobSource::Remotive),
            "arbeitnow" => Ok(JobSource::Arbeitnow),
            "jsearch" => Ok(JobSource::JSearch),
            _ => Err(format!("Unknown job source: {}", s)),
        }
    }
}

/// Which providers a search should hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFilter {
    sources: Vec<JobSource>,
}

impl SourceFilter {
    pub fn all() -> Self {
        Self {
            sources: JobSource::ALL.to_vec(),
        }
    }

    /// Resolve the `source` query parameter.
    ///
    /// Accepts `all` or a comma-separated list of provider names. Unknown
    /// names are ignored; when nothing is recognized every provider is used.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::all();
        };

        let mut sources = Vec::new();
        for token in raw.split(',') {
            if token.trim().eq_ignore_ascii_case("all") {
                return Self::all();
            }
            match token.parse::<JobSource>() {
                Ok(source) if !sources.contains(&source) => sources.push(source),
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "Ignoring source filter entry"),
            }
        }

        if sources.is_empty() {
            return Self::all();
        }
        sources.sort();
        Self { sources }
    }

    pub fn includes(&self, source: JobSource) -> bool {
        self.sources.contains(&source)
    }

    /// Selected providers, in catalogue order.
    pub fn sources(&self) -> &[JobSource] {
        &self.sources
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Static description of a selectable search source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDescriptor {
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub is_default: bool,
}

/// The list behind `GET /external-jobs/sources`. `all` is the default.
pub fn source_catalogue() -> Vec<SourceDescriptor> {
    let mut catalogue = vec![SourceDescriptor {
        name: "all".to_string(),
        description: "Search every provider at once".to_string(),
        logo: None,
        is_default: true,
    }];
    catalogue.extend(JobSource::ALL.iter().map(|source| SourceDescriptor {
        name: source.as_str().to_string(),
        description: source.description().to_string(),
        logo: Some(source.logo().to_string()),
        is_default: false,
    }));
    catalogue
}
