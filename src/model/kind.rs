use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{IdeInfoError, Result};

/// Toolchain family a rule kind belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageClass {
    Generic,
    C,
    Java,
    Android,
    Python,
    Go,
    Javascript,
    Typescript,
    Dart,
    Kotlin,
    Scala,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Library,
    Binary,
    Test,
    Unknown,
}

/// Build-rule classification of a target, e.g. `java_library` or `cc_binary`.
///
/// Kinds form a closed registry; [`Kind::from_string`] only resolves names listed in
/// [`Kind::ALL`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Kind {
    rule_name: &'static str,
    language_class: LanguageClass,
    rule_type: RuleType,
}

impl Kind {
    pub const CC_LIBRARY: Kind = Kind::new("cc_library", LanguageClass::C, RuleType::Library);
    pub const CC_BINARY: Kind = Kind::new("cc_binary", LanguageClass::C, RuleType::Binary);
    pub const CC_TEST: Kind = Kind::new("cc_test", LanguageClass::C, RuleType::Test);
    pub const CC_TOOLCHAIN: Kind = Kind::new("cc_toolchain", LanguageClass::C, RuleType::Unknown);
    pub const CC_TOOLCHAIN_SUITE: Kind =
        Kind::new("cc_toolchain_suite", LanguageClass::C, RuleType::Unknown);

    pub const JAVA_LIBRARY: Kind = Kind::new("java_library", LanguageClass::Java, RuleType::Library);
    pub const JAVA_BINARY: Kind = Kind::new("java_binary", LanguageClass::Java, RuleType::Binary);
    pub const JAVA_TEST: Kind = Kind::new("java_test", LanguageClass::Java, RuleType::Test);
    pub const JAVA_IMPORT: Kind = Kind::new("java_import", LanguageClass::Java, RuleType::Library);
    pub const JAVA_PROTO_LIBRARY: Kind =
        Kind::new("java_proto_library", LanguageClass::Java, RuleType::Library);
    pub const JAVA_TOOLCHAIN: Kind =
        Kind::new("java_toolchain", LanguageClass::Java, RuleType::Unknown);

    pub const ANDROID_LIBRARY: Kind =
        Kind::new("android_library", LanguageClass::Android, RuleType::Library);
    pub const ANDROID_BINARY: Kind =
        Kind::new("android_binary", LanguageClass::Android, RuleType::Binary);
    pub const ANDROID_TEST: Kind = Kind::new("android_test", LanguageClass::Android, RuleType::Test);
    pub const ANDROID_ROBOLECTRIC_TEST: Kind =
        Kind::new("android_robolectric_test", LanguageClass::Android, RuleType::Test);
    pub const ANDROID_LOCAL_TEST: Kind =
        Kind::new("android_local_test", LanguageClass::Android, RuleType::Test);
    pub const ANDROID_INSTRUMENTATION_TEST: Kind =
        Kind::new("android_instrumentation_test", LanguageClass::Android, RuleType::Test);
    pub const AAR_IMPORT: Kind = Kind::new("aar_import", LanguageClass::Android, RuleType::Library);
    pub const ANDROID_SDK: Kind = Kind::new("android_sdk", LanguageClass::Android, RuleType::Unknown);

    pub const PY_LIBRARY: Kind = Kind::new("py_library", LanguageClass::Python, RuleType::Library);
    pub const PY_BINARY: Kind = Kind::new("py_binary", LanguageClass::Python, RuleType::Binary);
    pub const PY_TEST: Kind = Kind::new("py_test", LanguageClass::Python, RuleType::Test);

    pub const GO_LIBRARY: Kind = Kind::new("go_library", LanguageClass::Go, RuleType::Library);
    pub const GO_BINARY: Kind = Kind::new("go_binary", LanguageClass::Go, RuleType::Binary);
    pub const GO_TEST: Kind = Kind::new("go_test", LanguageClass::Go, RuleType::Test);

    pub const JS_LIBRARY: Kind =
        Kind::new("js_library", LanguageClass::Javascript, RuleType::Library);
    pub const TS_LIBRARY: Kind =
        Kind::new("ts_library", LanguageClass::Typescript, RuleType::Library);
    pub const TS_CONFIG: Kind = Kind::new("ts_config", LanguageClass::Typescript, RuleType::Unknown);

    pub const DART_LIBRARY: Kind = Kind::new("dart_library", LanguageClass::Dart, RuleType::Library);

    pub const KT_JVM_LIBRARY: Kind =
        Kind::new("kt_jvm_library", LanguageClass::Kotlin, RuleType::Library);
    pub const KT_JVM_BINARY: Kind =
        Kind::new("kt_jvm_binary", LanguageClass::Kotlin, RuleType::Binary);
    pub const KT_JVM_TEST: Kind = Kind::new("kt_jvm_test", LanguageClass::Kotlin, RuleType::Test);
    pub const KT_JVM_TOOLCHAIN: Kind =
        Kind::new("kt_jvm_toolchain", LanguageClass::Kotlin, RuleType::Unknown);

    pub const SCALA_LIBRARY: Kind =
        Kind::new("scala_library", LanguageClass::Scala, RuleType::Library);
    pub const SCALA_BINARY: Kind = Kind::new("scala_binary", LanguageClass::Scala, RuleType::Binary);
    pub const SCALA_TEST: Kind = Kind::new("scala_test", LanguageClass::Scala, RuleType::Test);

    pub const PROTO_LIBRARY: Kind =
        Kind::new("proto_library", LanguageClass::Generic, RuleType::Library);
    pub const SH_BINARY: Kind = Kind::new("sh_binary", LanguageClass::Generic, RuleType::Binary);
    pub const SH_TEST: Kind = Kind::new("sh_test", LanguageClass::Generic, RuleType::Test);
    pub const TEST_SUITE: Kind = Kind::new("test_suite", LanguageClass::Generic, RuleType::Test);
    pub const FILEGROUP: Kind = Kind::new("filegroup", LanguageClass::Generic, RuleType::Unknown);
    pub const GENRULE: Kind = Kind::new("genrule", LanguageClass::Generic, RuleType::Unknown);

    pub const ALL: &'static [Kind] = &[
        Kind::CC_LIBRARY,
        Kind::CC_BINARY,
        Kind::CC_TEST,
        Kind::CC_TOOLCHAIN,
        Kind::CC_TOOLCHAIN_SUITE,
        Kind::JAVA_LIBRARY,
        Kind::JAVA_BINARY,
        Kind::JAVA_TEST,
        Kind::JAVA_IMPORT,
        Kind::JAVA_PROTO_LIBRARY,
        Kind::JAVA_TOOLCHAIN,
        Kind::ANDROID_LIBRARY,
        Kind::ANDROID_BINARY,
        Kind::ANDROID_TEST,
        Kind::ANDROID_ROBOLECTRIC_TEST,
        Kind::ANDROID_LOCAL_TEST,
        Kind::ANDROID_INSTRUMENTATION_TEST,
        Kind::AAR_IMPORT,
        Kind::ANDROID_SDK,
        Kind::PY_LIBRARY,
        Kind::PY_BINARY,
        Kind::PY_TEST,
        Kind::GO_LIBRARY,
        Kind::GO_BINARY,
        Kind::GO_TEST,
        Kind::JS_LIBRARY,
        Kind::TS_LIBRARY,
        Kind::TS_CONFIG,
        Kind::DART_LIBRARY,
        Kind::KT_JVM_LIBRARY,
        Kind::KT_JVM_BINARY,
        Kind::KT_JVM_TEST,
        Kind::KT_JVM_TOOLCHAIN,
        Kind::SCALA_LIBRARY,
        Kind::SCALA_BINARY,
        Kind::SCALA_TEST,
        Kind::PROTO_LIBRARY,
        Kind::SH_BINARY,
        Kind::SH_TEST,
        Kind::TEST_SUITE,
        Kind::FILEGROUP,
        Kind::GENRULE,
    ];

    const fn new(
        rule_name: &'static str,
        language_class: LanguageClass,
        rule_type: RuleType,
    ) -> Self {
        Self {
            rule_name,
            language_class,
            rule_type,
        }
    }

    /// Looks up a registered kind by its rule name.
    pub fn from_string(rule_name: &str) -> Option<Kind> {
        Kind::ALL
            .iter()
            .find(|kind| kind.rule_name == rule_name)
            .copied()
    }

    pub fn parse(rule_name: &str) -> Result<Kind> {
        Kind::from_string(rule_name).ok_or_else(|| IdeInfoError::UnknownKind(rule_name.to_string()))
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    pub fn language_class(&self) -> LanguageClass {
        self.language_class
    }

    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    pub fn is_one_of<'a>(&self, kinds: impl IntoIterator<Item = &'a Kind>) -> bool {
        kinds.into_iter().any(|kind| kind == self)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name)
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Kind::parse(&String::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.rule_name.to_string()
    }
}
