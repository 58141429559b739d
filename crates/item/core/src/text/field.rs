use super::placeholder::{PlaceholderSource, substitute};
use crate::color::{ColorSpec, Rgb};

/// A contiguous text fragment paired with one resolved color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledRun {
    pub text: String,
    pub color: Rgb,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Template text plus the color applied after substitution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextField {
    pub template: String,
    pub color: ColorSpec,
}

impl TextField {
    pub fn new(template: impl Into<String>, color: ColorSpec) -> Self {
        Self {
            template: template.into(),
            color,
        }
    }

    pub fn solid(template: impl Into<String>, color: Rgb) -> Self {
        Self::new(template, ColorSpec::Solid(color))
    }

    /// Renders the field. Pure: equal inputs always give equal runs.
    ///
    /// Substitution happens first, then coloring:
    /// - solid: the whole string as one run
    /// - gradient: one run per character; an empty string gives no runs
    pub fn render<P>(&self, placeholders: &P) -> Vec<StyledRun>
    where
        P: PlaceholderSource + ?Sized,
    {
        let text = substitute(&self.template, placeholders);

        match self.color {
            ColorSpec::Solid(color) => vec![StyledRun::new(text, color)],
            ColorSpec::Gradient { .. } => {
                let colors = self.color.colors(text.chars().count());
                text.chars()
                    .zip(colors)
                    .map(|(ch, color)| StyledRun::new(ch, color))
                    .collect()
            }
        }
    }
}

/// Merges adjacent runs that share a color.
///
/// Concatenated text and per-character colors are unchanged.
pub fn coalesce(runs: Vec<StyledRun>) -> Vec<StyledRun> {
    let mut merged: Vec<StyledRun> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if last.color == run.color => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

/// Concatenated text of `runs` with styling dropped.
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
