//! Setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub required: bool,
    pub description: &'static str,
}

pub const STORAGE_ROOT: &str = "QR_STORAGE_ROOT";
pub const PUBLIC_BASE_URL: &str = "QR_PUBLIC_BASE_URL";
pub const LOGO_PATH: &str = "QR_LOGO_PATH";

pub const SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: STORAGE_ROOT,
        default: "",
        required: true,
        description: "Public files directory; codes are written to its qr-code/ subdirectory",
    },
    SettingDef {
        key: PUBLIC_BASE_URL,
        default: "",
        required: true,
        description: "URL under which the public files directory is served",
    },
    SettingDef {
        key: LOGO_PATH,
        default: "",
        required: false,
        description: "Logo overlaid on each code (defaults to the bundled logo)",
    },
];

