//! Build-target descriptor types.
//!
//! A target descriptor is an inert record declaring, once per build
//! invocation, the static parameters a build host needs to produce one
//! artifact: the target flavor, two version tags selecting host-defined
//! behavior bundles, and the ordered list of modules to compile in.
//!
//! Construction is pure field assignment. Descriptors perform no validation
//! of their own beyond what the enum types enforce; rejecting incompatible
//! combinations is the host's job (see [`crate::host`]).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use thiserror::Error;

/// Build flavor a descriptor selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Editor executable (tooling + game modules)
    Editor,
    /// Standalone game executable
    Game,
    /// Client-only networked build
    Client,
    /// Dedicated server build (no rendering)
    Server,
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetType::Editor => write!(f, "editor"),
            TargetType::Game => write!(f, "game"),
            TargetType::Client => write!(f, "client"),
            TargetType::Server => write!(f, "server"),
        }
    }
}

/// Error for an unrecognized enumerated tag.
///
/// An unknown tag is a configuration error, never a runtime one: it is
/// raised while parsing config or CLI arguments, before any descriptor
/// is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} tag '{value}' (expected one of: {expected})")]
pub struct UnknownTag {
    /// Which tag family was being parsed (e.g. "target type")
    pub kind: &'static str,
    /// The offending input
    pub value: String,
    /// Comma-separated list of accepted spellings
    pub expected: &'static str,
}

impl FromStr for TargetType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "editor" => Ok(TargetType::Editor),
            "game" => Ok(TargetType::Game),
            "client" => Ok(TargetType::Client),
            "server" => Ok(TargetType::Server),
            other => Err(UnknownTag {
                kind: "target type",
                value: other.to_string(),
                expected: "editor, game, client, server",
            }),
        }
    }
}

/// Version tag selecting a named bundle of default toolchain behaviors.
///
/// Tags are opaque to this crate; the host maps them to concrete compiler
/// defaults. `Latest` always aliases the newest bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildSettingsVersion {
    V1,
    V2,
    V3,
    V4,
    #[default]
    V5,
    Latest,
}

impl std::fmt::Display for BuildSettingsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildSettingsVersion::V1 => write!(f, "v1"),
            BuildSettingsVersion::V2 => write!(f, "v2"),
            BuildSettingsVersion::V3 => write!(f, "v3"),
            BuildSettingsVersion::V4 => write!(f, "v4"),
            BuildSettingsVersion::V5 => write!(f, "v5"),
            BuildSettingsVersion::Latest => write!(f, "latest"),
        }
    }
}

impl FromStr for BuildSettingsVersion {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(BuildSettingsVersion::V1),
            "v2" => Ok(BuildSettingsVersion::V2),
            "v3" => Ok(BuildSettingsVersion::V3),
            "v4" => Ok(BuildSettingsVersion::V4),
            "v5" => Ok(BuildSettingsVersion::V5),
            "latest" => Ok(BuildSettingsVersion::Latest),
            other => Err(UnknownTag {
                kind: "build settings version",
                value: other.to_string(),
                expected: "v1, v2, v3, v4, v5, latest",
            }),
        }
    }
}

/// Version tag selecting a header-include-ordering convention.
///
/// The host uses this to decide how strictly include hygiene is enforced
/// across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncludeOrderVersion {
    Oldest,
    V1,
    V2,
    V3,
    V4,
    V5,
    #[default]
    V6,
    Latest,
}

impl std::fmt::Display for IncludeOrderVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncludeOrderVersion::Oldest => write!(f, "oldest"),
            IncludeOrderVersion::V1 => write!(f, "v1"),
            IncludeOrderVersion::V2 => write!(f, "v2"),
            IncludeOrderVersion::V3 => write!(f, "v3"),
            IncludeOrderVersion::V4 => write!(f, "v4"),
            IncludeOrderVersion::V5 => write!(f, "v5"),
            IncludeOrderVersion::V6 => write!(f, "v6"),
            IncludeOrderVersion::Latest => write!(f, "latest"),
        }
    }
}

impl FromStr for IncludeOrderVersion {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oldest" => Ok(IncludeOrderVersion::Oldest),
            "v1" => Ok(IncludeOrderVersion::V1),
            "v2" => Ok(IncludeOrderVersion::V2),
            "v3" => Ok(IncludeOrderVersion::V3),
            "v4" => Ok(IncludeOrderVersion::V4),
            "v5" => Ok(IncludeOrderVersion::V5),
            "v6" => Ok(IncludeOrderVersion::V6),
            "latest" => Ok(IncludeOrderVersion::Latest),
            other => Err(UnknownTag {
                kind: "include order version",
                value: other.to_string(),
                expected: "oldest, v1, v2, v3, v4, v5, v6, latest",
            }),
        }
    }
}

/// Platform the host is building for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Win64,
    Linux,
    Mac,
    Ios,
    Android,
}

impl Platform {
    /// Whether this platform can host editor targets at all.
    ///
    /// Mobile platforms only accept cooked game/client builds.
    pub fn supports_editor(&self) -> bool {
        matches!(self, Platform::Win64 | Platform::Linux | Platform::Mac)
    }

    /// Whether dedicated server targets make sense on this platform.
    pub fn supports_server(&self) -> bool {
        matches!(self, Platform::Win64 | Platform::Linux | Platform::Mac)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Win64 => write!(f, "win64"),
            Platform::Linux => write!(f, "linux"),
            Platform::Mac => write!(f, "mac"),
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

impl FromStr for Platform {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win64" => Ok(Platform::Win64),
            "linux" => Ok(Platform::Linux),
            "mac" => Ok(Platform::Mac),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(UnknownTag {
                kind: "platform",
                value: other.to_string(),
                expected: "win64, linux, mac, ios, android",
            }),
        }
    }
}

/// Optimization/packaging flavor of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    Debug,
    #[default]
    Development,
    Shipping,
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildConfiguration::Debug => write!(f, "debug"),
            BuildConfiguration::Development => write!(f, "development"),
            BuildConfiguration::Shipping => write!(f, "shipping"),
        }
    }
}

impl FromStr for BuildConfiguration {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildConfiguration::Debug),
            "development" => Ok(BuildConfiguration::Development),
            "shipping" => Ok(BuildConfiguration::Shipping),
            other => Err(UnknownTag {
                kind: "build configuration",
                value: other.to_string(),
                expected: "debug, development, shipping",
            }),
        }
    }
}

/// Host-supplied context a descriptor is constructed from.
///
/// The context carries the project identity and platform/configuration
/// information. Descriptor construction only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetContext {
    /// Project name; becomes the primary module of every descriptor
    pub project: String,
    /// Platform being built for
    #[serde(default)]
    pub platform: Platform,
    /// Build configuration
    #[serde(default)]
    pub configuration: BuildConfiguration,
}

impl TargetContext {
    /// Create a context for a project with default platform/configuration.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            platform: Platform::default(),
            configuration: BuildConfiguration::default(),
        }
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the build configuration.
    pub fn with_configuration(mut self, configuration: BuildConfiguration) -> Self {
        self.configuration = configuration;
        self
    }
}

/// A populated build-target descriptor.
///
/// Constructed once per build invocation, read by the host, then discarded.
/// All constructors assign every field up front; there is no later state
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Target name (e.g. "editor"); unique within a registry
    pub name: String,
    /// Build flavor; exactly one per descriptor, fixed at construction
    pub target_type: TargetType,
    /// Default toolchain behavior bundle
    #[serde(default)]
    pub build_settings: BuildSettingsVersion,
    /// Include-ordering convention
    #[serde(default)]
    pub include_order: IncludeOrderVersion,
    /// Ordered module names; always starts with the project's primary module
    pub modules: Vec<String>,
}

impl TargetDescriptor {
    /// Construct a descriptor of the given flavor.
    ///
    /// The project's own module is always the first entry in `modules`,
    /// so a freshly constructed descriptor is never module-less.
    pub fn new(name: impl Into<String>, target_type: TargetType, ctx: &TargetContext) -> Self {
        Self {
            name: name.into(),
            target_type,
            build_settings: BuildSettingsVersion::default(),
            include_order: IncludeOrderVersion::default(),
            modules: vec![ctx.project.clone()],
        }
    }

    /// Construct an editor-flavor descriptor named "editor".
    pub fn editor(ctx: &TargetContext) -> Self {
        Self::new("editor", TargetType::Editor, ctx)
    }

    /// Construct a game-flavor descriptor named "game".
    pub fn game(ctx: &TargetContext) -> Self {
        Self::new("game", TargetType::Game, ctx)
    }

    /// Construct a client-flavor descriptor named "client".
    pub fn client(ctx: &TargetContext) -> Self {
        Self::new("client", TargetType::Client, ctx)
    }

    /// Construct a server-flavor descriptor named "server".
    pub fn server(ctx: &TargetContext) -> Self {
        Self::new("server", TargetType::Server, ctx)
    }

    /// Override the build settings version tag.
    pub fn with_build_settings(mut self, version: BuildSettingsVersion) -> Self {
        self.build_settings = version;
        self
    }

    /// Override the include order version tag.
    pub fn with_include_order(mut self, version: IncludeOrderVersion) -> Self {
        self.include_order = version;
        self
    }

    /// Append an extra module to the build.
    ///
    /// Order is preserved: modules are handed to the host in declaration
    /// order. Duplicates are not filtered here; the host rejects them
    /// during validation.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.push(module.into());
        self
    }

    /// Append several extra modules, preserving order.
    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Canonical identifier: `type:name` (e.g. "editor:editor").
    pub fn id(&self) -> String {
        format!("{}:{}", self.target_type, self.name)
    }

    /// The project's primary module (always present).
    pub fn primary_module(&self) -> &str {
        &self.modules[0]
    }

    /// Check whether this descriptor matches a filter string.
    ///
    /// Supports:
    /// - Exact id: "editor:editor"
    /// - Type-only: "editor" (matches all editor-flavor targets)
    /// - Patterns: "editor:*", "*:myname"
    pub fn matches_filter(&self, filter: &str) -> bool {
        if self.id() == filter || self.name == filter {
            return true;
        }

        if self.target_type.to_string() == filter {
            return true;
        }

        if let Some((type_pat, name_pat)) = filter.split_once(':') {
            let type_matches = type_pat == "*" || type_pat == self.target_type.to_string();
            let name_matches = name_pat == "*" || name_pat == self.name;
            return type_matches && name_matches;
        }

        false
    }
}
