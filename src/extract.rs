use crate::error::ExtractError;
use crate::naming::ArtifactKind;

pub const FENCE: &str = "```";

const TEST_SUITE_STRATEGIES: &[FenceStrategy] =
    &[FenceStrategy::Labeled("javascript"), FenceStrategy::Generic];
const FAILURE_REPORT_STRATEGIES: &[FenceStrategy] = &[FenceStrategy::Labeled("markdown")];

/// One way of locating a fenced block inside a model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceStrategy {
    /// An opening fence carrying exactly this info string, e.g. ```` ```javascript ````.
    /// The block closes at the bare fence line that balances any fences opened inside it.
    Labeled(&'static str),
    /// The first pair of fence markers, whatever follows the opener.
    Generic,
}

/// Which rule produced the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Labeled(&'static str),
    Generic,
    Unfenced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub source: ExtractionSource,
}

impl FenceStrategy {
    /// Returns the trimmed body of the matched block. An opener without a closing
    /// marker, or a block with an empty body, is not a match.
    pub fn try_extract<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let body = match self {
            Self::Labeled(label) => balanced_block(after_labeled_opener(raw, label)?)?,
            Self::Generic => {
                let start = raw.find(FENCE)? + FENCE.len();
                skip_info_string(block_until_closing_fence(&raw[start..])?)
            }
        };
        let body = body.trim();
        (!body.is_empty()).then_some(body)
    }

    fn source(self) -> ExtractionSource {
        match self {
            Self::Labeled(label) => ExtractionSource::Labeled(label),
            Self::Generic => ExtractionSource::Generic,
        }
    }
}

/// Ordered strategy list; the first strategy that matches wins, otherwise the whole
/// reply is used trimmed.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    strategies: &'static [FenceStrategy],
}

impl Extractor {
    pub const fn new(strategies: &'static [FenceStrategy]) -> Self {
        Self { strategies }
    }

    pub fn for_artifact(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::TestSuite => Self::new(TEST_SUITE_STRATEGIES),
            ArtifactKind::FailureReport => Self::new(FAILURE_REPORT_STRATEGIES),
        }
    }

    pub fn strategies(&self) -> &'static [FenceStrategy] {
        self.strategies
    }

    pub fn extract(&self, raw: &str) -> Result<Extracted, ExtractError> {
        let matched = self.strategies.iter().find_map(|strategy| {
            strategy
                .try_extract(raw)
                .map(|body| (body, strategy.source()))
        });
        if let Some((body, source)) = matched {
            return Ok(Extracted {
                text: body.to_string(),
                source,
            });
        }
        let text = raw.trim();
        if text.is_empty() {
            return Err(ExtractError::Empty);
        }
        Ok(Extracted {
            text: text.to_string(),
            source: ExtractionSource::Unfenced,
        })
    }
}

fn block_until_closing_fence(rest: &str) -> Option<&str> {
    let end = rest.find(FENCE)?;
    Some(&rest[..end])
}

/// Text following the first opener line whose info string is exactly `label`.
fn after_labeled_opener<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    let opener = format!("{FENCE}{label}");
    raw.match_indices(&opener).find_map(|(index, _)| {
        let rest = &raw[index + opener.len()..];
        let (info_tail, body) = rest.split_once('\n')?;
        info_tail.trim().is_empty().then_some(body)
    })
}

/// Cuts `body` at the bare fence line that closes it, skipping over nested
/// blocks opened with an info string (```` ```javascript ```` inside a markdown reply).
fn balanced_block(body: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if let Some(info) = line.trim().strip_prefix(FENCE) {
            if info.trim_start_matches('`').trim().is_empty() {
                if depth == 0 {
                    return Some(&body[..offset]);
                }
                depth -= 1;
            } else {
                depth += 1;
            }
        }
        offset += line.len();
    }
    None
}

// A bare token on the opener line (```lang) is an info string, not content.
fn skip_info_string(block: &str) -> &str {
    let Some((first_line, rest)) = block.split_once('\n') else {
        return block;
    };
    let is_info_string = first_line
        .trim()
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '_' | '.' | '#'));
    if is_info_string { rest } else { block }
}

#[cfg(test)]
#[path = "../tests/unit/extract_tests.rs"]
mod tests;
