/// Restricts the zones a provider manages to a set of domain suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    domains: Vec<String>,
}

impl DomainFilter {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| normalize(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    /// Parses a comma separated list, e.g. `example.com, example.org`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// An empty filter matches everything.
    pub fn matches(&self, name: &str) -> bool {
        if self.domains.is_empty() {
            return true;
        }
        let name = normalize(name);
        self.domains
            .iter()
            .any(|d| name == *d || name.ends_with(&format!(".{d}")))
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
