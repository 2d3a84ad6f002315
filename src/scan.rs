//! Recursive file search driven by a KMP [`Matcher`].

use std::{
    io,
    ops::Range,
    path::{Path, PathBuf},
};

use grep::searcher::{BinaryDetection, SearcherBuilder};
use regex::Regex;

use crate::{error::Result, kmp::Matcher};

pub struct Matches {
    pub files: Vec<FileMatch>,
}

pub struct FileMatch {
    pub path: PathBuf,
    /// Byte ranges of every occurrence, relative to the start of the file
    spans: Vec<Range<usize>>,
}

impl FileMatch {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            spans: vec![],
        }
    }

    fn push_hits(&mut self, matcher: &Matcher, offset: usize, haystack: &[u8]) {
        for idx in matcher.search_all(haystack) {
            let start = offset + idx;
            self.spans.push(start..start + matcher.len());
        }
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn read_content(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

impl Matches {
    /// Walks `root`, honoring ignore files, and records every occurrence of
    /// the matcher's pattern. Only files whose path matches `path_filter`
    /// are searched when a filter is given.
    pub fn collect(root: &Path, matcher: &Matcher, path_filter: Option<&Regex>) -> Result<Self> {
        let mut searcher = SearcherBuilder::new()
            .binary_detection(BinaryDetection::quit(b'\x00'))
            .build();
        let mut files = vec![];
        for result in ignore::Walk::new(root) {
            let dir = result?;

            let Some(file_type) = dir.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            let path = dir.path();
            if let Some(re) = path_filter {
                if !re.is_match(&path.to_string_lossy()) {
                    tracing::trace!(path = %path.display(), "skipped by path filter");
                    continue;
                }
            }

            let mut file = FileMatch::new(path);
            if matcher.pattern().contains(&b'\n') {
                search_whole_file(matcher, &mut file)?;
            } else {
                searcher.search_path(
                    LineMatcher(matcher),
                    path,
                    Sink(|byte_offset, line: &[u8]| {
                        file.push_hits(matcher, byte_offset as usize, line);
                    }),
                )?;
            }
            tracing::debug!(path = %path.display(), hits = file.spans.len(), "searched file");
            if !file.spans.is_empty() {
                files.push(file);
            }
        }
        Ok(Self { files })
    }

    pub fn total(&self) -> usize {
        self.files.iter().map(|file| file.spans.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// The line-oriented searcher never sees a hit that crosses a line
/// terminator, so patterns containing one are run over the whole file.
/// Binary files are skipped the same way the searcher skips them.
fn search_whole_file(matcher: &Matcher, file: &mut FileMatch) -> io::Result<()> {
    let content = std::fs::read(&file.path)?;
    if content.contains(&b'\x00') {
        return Ok(());
    }
    file.push_hits(matcher, 0, &content);
    Ok(())
}

struct Sink<F>(pub F)
where
    F: FnMut(u64, &[u8]);

impl<F> grep::searcher::Sink for Sink<F>
where
    F: FnMut(u64, &[u8]),
{
    type Error = io::Error;

    fn matched(
        &mut self,
        _searcher: &grep::searcher::Searcher,
        mat: &grep::searcher::SinkMatch<'_>,
    ) -> std::result::Result<bool, Self::Error> {
        (self.0)(mat.absolute_byte_offset(), mat.bytes());
        Ok(true)
    }
}

/// Adapts a byte [`Matcher`] to the interface `grep` searches with.
struct LineMatcher<'a>(&'a Matcher);

impl grep::matcher::Matcher for LineMatcher<'_> {
    type Captures = grep::matcher::NoCaptures;

    type Error = grep::matcher::NoError;

    fn find_at(
        &self,
        haystack: &[u8],
        at: usize,
    ) -> std::result::Result<Option<grep::matcher::Match>, Self::Error> {
        Ok(self
            .0
            .search_first(&haystack[at..])
            .map(|idx| grep::matcher::Match::new(at + idx, at + idx + self.0.len())))
    }

    fn new_captures(&self) -> std::result::Result<Self::Captures, Self::Error> {
        Ok(grep::matcher::NoCaptures::new())
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
