//! Per-target metadata imported from the build tool: the [`TargetIdeInfo`] aggregate, its
//! builder, and one facet type per language toolchain.

pub use android_aar_ide_info::AndroidAarIdeInfo;
pub use android_ide_info::{AndroidIdeInfo, AndroidIdeInfoBuilder};
pub use android_sdk_ide_info::AndroidSdkIdeInfo;
pub use c_ide_info::{CIdeInfo, CIdeInfoBuilder};
pub use c_toolchain_ide_info::{CToolchainIdeInfo, CToolchainIdeInfoBuilder};
pub use dart_ide_info::{DartIdeInfo, DartIdeInfoBuilder};
pub use dependency::{Dependency, DependencyType};
pub use go_ide_info::{GoIdeInfo, GoIdeInfoBuilder};
pub use java_ide_info::{JavaIdeInfo, JavaIdeInfoBuilder, LibraryArtifact};
pub use java_toolchain_ide_info::{JavaToolchainIdeInfo, JavaToolchainIdeInfoBuilder};
pub use js_ide_info::{JsIdeInfo, JsIdeInfoBuilder};
pub use kotlin_toolchain_ide_info::{KotlinToolchainIdeInfo, KotlinToolchainIdeInfoBuilder};
pub use py_ide_info::{PyIdeInfo, PyIdeInfoBuilder, PythonVersion};
pub use target_ide_info::{TargetFacets, TargetIdeInfo, TargetIdeInfoBuilder};
pub use test_ide_info::{TestIdeInfo, TestIdeInfoBuilder, TestSize};
pub use ts_ide_info::{TsIdeInfo, TsIdeInfoBuilder};

mod android_aar_ide_info;
mod android_ide_info;
mod android_sdk_ide_info;
mod c_ide_info;
mod c_toolchain_ide_info;
mod dart_ide_info;
mod dependency;
mod go_ide_info;
mod java_ide_info;
mod java_toolchain_ide_info;
mod js_ide_info;
mod kotlin_toolchain_ide_info;
mod py_ide_info;
mod target_ide_info;
mod test_ide_info;
mod ts_ide_info;
