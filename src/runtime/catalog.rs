use std::fmt::Display;
use tracing::{info, info_span, warn};

use super::demos::{
    BuilderDemo, FactoryDemo, IteratorDemo, ObserverDemo, SingletonDemo, StrategyDemo,
};
use crate::CatalogError;

/// A self-contained, runnable example of one pattern.
///
/// Implementations return their console lines instead of printing them, so tests can
/// check the output directly.
pub trait Demonstration {
    /// Pattern name used in the section header, e.g. `"Strategy"`.
    fn title(&self) -> &'static str;

    fn run(&self) -> Result<Vec<String>, CatalogError>;
}

/// Ordered list of demonstrations to run.
///
/// # Example
///
/// ```rust
/// use pattern_catalog::runtime::Catalog;
///
/// let report = Catalog::standard().run().unwrap();
/// assert_eq!(report.sections().len(), 6);
/// assert_eq!(report.sections()[2].lines, ["Fedex: 2.45", "UPS: 1.56", "USPS: 4.5"]);
/// ```
#[derive(Default)]
pub struct Catalog {
    demonstrations: Vec<Box<dyn Demonstration>>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All six patterns in their canonical order: Factory Method, Singleton, Strategy,
    /// Iterator, Observer, Builder.
    pub fn standard() -> Self {
        Self::new()
            .with(FactoryDemo)
            .with(SingletonDemo::default())
            .with(StrategyDemo)
            .with(IteratorDemo)
            .with(ObserverDemo)
            .with(BuilderDemo)
    }

    pub fn with(mut self, demonstration: impl Demonstration + 'static) -> Self {
        self.demonstrations.push(Box::new(demonstration));
        self
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.demonstrations.iter().map(|d| d.title()).collect()
    }

    /// Runs every demonstration in order, stopping at the first failure.
    pub fn run(&self) -> Result<Report, CatalogError> {
        let mut sections = Vec::with_capacity(self.demonstrations.len());
        for demonstration in &self.demonstrations {
            let title = demonstration.title();
            let _span = info_span!("demonstration", title).entered();
            info!(title, "Running");
            let lines = demonstration.run().inspect_err(|e| {
                warn!(title, error = %e, "Demonstration failed");
            })?;
            info!(title, lines = lines.len(), "Completed");
            sections.push(Section { title, lines });
        }
        Ok(Report { sections })
    }
}

/// Output of one demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Output of a whole catalog run. `Display` renders it as console text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for section in &self.sections {
            writeln!(f, "===== {} Example Output =====", section.title)?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
