//! Tweet entity stripping: retweet headers, links, reply mentions and
//! trailing hashtags.
//!
//! Patterns are anchored where the entity only counts as noise in one
//! position. A mention in the middle of a sentence is content; a run of
//! mentions at the very start is reply addressing. Same for hashtags at the
//! end versus hashtags used as words.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::TextTransform;

/// `RT @handle: ` at the very start.
static RE_RETWEET_META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RT @\w+: +").expect("valid retweet regex"));

/// Scheme plus the whole non-whitespace token after it.
static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?:\S+").expect("valid url regex"));

/// One or more `@handle ` tokens at position 0. `.@handle` never matches.
static RE_LEADING_MENTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@\w+\s+)+").expect("valid mention regex"));

/// One or more `#tag` tokens running to the end of the text.
static RE_TRAILING_HASHTAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:#\w+\s*)+$").expect("valid hashtag regex"));

fn remove_matches(re: &Regex, text: &mut String) {
    let replaced = match re.replace_all(text, "") {
        Cow::Borrowed(_) => return,
        Cow::Owned(s) => s,
    };
    *text = replaced;
}

/// Removes a single leading `RT @handle: ` prefix.
pub struct StripRetweetMeta;

impl TextTransform for StripRetweetMeta {
    fn name(&self) -> &'static str {
        "strip_retweet_meta"
    }

    fn transform(&self, text: &mut String) {
        // Anchored, so at most one match
        remove_matches(&RE_RETWEET_META, text);
    }
}

/// Removes every `http:`/`https:` link. Whitespace around the link stays.
pub struct StripUrls;

impl TextTransform for StripUrls {
    fn name(&self) -> &'static str {
        "strip_urls"
    }

    fn transform(&self, text: &mut String) {
        remove_matches(&RE_URL, text);
    }
}

/// Removes the run of `@mentions` a reply starts with.
pub struct StripLeadingMentions;

impl TextTransform for StripLeadingMentions {
    fn name(&self) -> &'static str {
        "strip_leading_mentions"
    }

    fn transform(&self, text: &mut String) {
        remove_matches(&RE_LEADING_MENTIONS, text);
    }
}

/// Removes the run of `#hashtags` a tweet ends with.
pub struct StripTrailingHashtags;

impl TextTransform for StripTrailingHashtags {
    fn name(&self) -> &'static str {
        "strip_trailing_hashtags"
    }

    fn transform(&self, text: &mut String) {
        remove_matches(&RE_TRAILING_HASHTAGS, text);
    }
}
