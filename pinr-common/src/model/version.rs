// pinr-common/src/model/version.rs
//! Symbolic version tokens and the repository channels they map to.
use std::fmt;

/// A requested version as written in the dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionToken {
    /// `RELEASE`: the newest stable release.
    Release,
    /// `LATEST`: the newest available build, snapshots included.
    Latest,
    /// Anything else, including snapshot-qualified versions like `1.0-SNAPSHOT`.
    Pinned(String),
}

impl VersionToken {
    pub const RELEASE: &'static str = "RELEASE";
    pub const LATEST: &'static str = "LATEST";

    /// Classifies a requested version. Token matching ignores ASCII case.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(Self::RELEASE) {
            VersionToken::Release
        } else if raw.eq_ignore_ascii_case(Self::LATEST) {
            VersionToken::Latest
        } else {
            VersionToken::Pinned(raw.to_string())
        }
    }

    /// The channel a floating token is looked up in; `None` for pinned versions.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            VersionToken::Release => Some(Channel::Releases),
            VersionToken::Latest => Some(Channel::Prerelease),
            VersionToken::Pinned(_) => None,
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Release => f.write_str(Self::RELEASE),
            VersionToken::Latest => f.write_str(Self::LATEST),
            VersionToken::Pinned(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Releases,
    Prerelease,
}

/// Configured repository names for each [`Channel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMap {
    releases: String,
    prerelease: String,
}

impl ChannelMap {
    pub fn new(releases: impl Into<String>, prerelease: impl Into<String>) -> Self {
        Self {
            releases: releases.into(),
            prerelease: prerelease.into(),
        }
    }

    pub fn name(&self, channel: Channel) -> &str {
        match channel {
            Channel::Releases => &self.releases,
            Channel::Prerelease => &self.prerelease,
        }
    }

    pub fn for_token(&self, token: &VersionToken) -> Option<&str> {
        token.channel().map(|c| self.name(c))
    }
}
