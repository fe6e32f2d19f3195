use serde::{Deserialize, Serialize};

/// Compiler configuration of a `cc_toolchain` target.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CToolchainIdeInfo {
    pub target_name: String,
    pub c_compiler: String,
    pub cpp_compiler: String,
    pub c_options: Vec<String>,
    pub cpp_options: Vec<String>,
    pub built_in_include_directories: Vec<String>,
}

impl CToolchainIdeInfo {
    pub fn builder() -> CToolchainIdeInfoBuilder {
        CToolchainIdeInfoBuilder::default()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CToolchainIdeInfoBuilder {
    target_name: String,
    c_compiler: String,
    cpp_compiler: String,
    c_options: Vec<String>,
    cpp_options: Vec<String>,
    built_in_include_directories: Vec<String>,
}

impl CToolchainIdeInfoBuilder {
    pub fn set_target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = target_name.into();
        self
    }

    pub fn set_c_compiler(mut self, c_compiler: impl Into<String>) -> Self {
        self.c_compiler = c_compiler.into();
        self
    }

    pub fn set_cpp_compiler(mut self, cpp_compiler: impl Into<String>) -> Self {
        self.cpp_compiler = cpp_compiler.into();
        self
    }

    pub fn add_c_options(mut self, options: impl IntoIterator<Item = String>) -> Self {
        self.c_options.extend(options);
        self
    }

    pub fn add_cpp_options(mut self, options: impl IntoIterator<Item = String>) -> Self {
        self.cpp_options.extend(options);
        self
    }

    pub fn add_built_in_include_directories(
        mut self,
        directories: impl IntoIterator<Item = String>,
    ) -> Self {
        self.built_in_include_directories.extend(directories);
        self
    }

    pub fn build(self) -> CToolchainIdeInfo {
        CToolchainIdeInfo {
            target_name: self.target_name,
            c_compiler: self.c_compiler,
            cpp_compiler: self.cpp_compiler,
            c_options: self.c_options,
            cpp_options: self.cpp_options,
            built_in_include_directories: self.built_in_include_directories,
        }
    }
}
