//! Statistics for a discovery run

use std::time::Duration;

use crate::extractor::FileReport;

/// Discovery statistics across all scanned sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    pub sources_scanned: usize,
    pub packages_found: usize,
    pub containers_found: usize,
    pub containers_unclassified: usize,
    pub duplicates_suppressed: usize,
    pub multi_sideload_sources: usize,
    pub elapsed_time: Duration,
}

impl DiscoveryStats {
    pub(crate) fn record(&mut self, packages: usize, report: &FileReport) {
        self.sources_scanned += 1;
        self.packages_found += packages;
        self.containers_found += report.containers_found;
        self.containers_unclassified += report.containers_unclassified;
        self.duplicates_suppressed += report.duplicates;
        if report.multi_sideload {
            self.multi_sideload_sources += 1;
        }
    }
}

impl std::fmt::Display for DiscoveryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scripts: {} scanned | Packages: {} found, {} duplicates | Containers: {} found, {} unclassified | Time: {}",
            format_number(self.sources_scanned),
            format_number(self.packages_found),
            format_number(self.duplicates_suppressed),
            format_number(self.containers_found),
            self.containers_unclassified,
            format_duration(self.elapsed_time)
        )?;
        if self.multi_sideload_sources > 0 {
            write!(f, " | {} with multiple sideloads", self.multi_sideload_sources)?;
        }
        Ok(())
    }
}

/// `1234567` -> `1,234,567`
fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Script scans are usually sub-second, so those report milliseconds
fn format_duration(d: Duration) -> String {
    match d.as_secs() {
        0 => format!("{}ms", d.as_millis()),
        s @ 1..=59 => format!("{}.{}s", s, d.subsec_millis() / 100),
        s => format!("{}m {}s", s / 60, s % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_duration_units() {
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_display_mentions_multi_sideload_only_when_present() {
        let mut stats = DiscoveryStats {
            sources_scanned: 1200,
            packages_found: 3,
            ..Default::default()
        };
        let line = stats.to_string();
        assert!(line.starts_with("Scripts: 1,200 scanned | Packages: 3 found, 0 duplicates"));
        assert!(!line.contains("sideload"));

        stats.multi_sideload_sources = 2;
        assert!(stats.to_string().ends_with("| 2 with multiple sideloads"));
    }
}
