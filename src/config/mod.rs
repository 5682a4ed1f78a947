mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    Config, DEFAULT_MOCK_IDENTIFIER, DEFAULT_ROOT, DEFAULT_SOURCE_MARKER, DEFAULT_TEST_MARKER,
    ExcludeConfig, ExclusionRuleConfig,
};
