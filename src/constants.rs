/// Constants used throughout stylesort
/// Compiled-in defaults that apply when no settings file overrides them

/// Directory holding the flat stylesheet files, relative to the project root
pub const DEFAULT_COMPONENTS_DIR: &str = "src/styles/components";

/// Aggregator importing components relative to the styles directory
pub const DEFAULT_STYLES_INDEX: &str = "src/styles/index.css";

/// Aggregator importing a few components relative to `src/`
pub const DEFAULT_ROOT_INDEX: &str = "src/index.css";

/// Import prefix used by the styles index for component files
pub const DEFAULT_STYLES_PREFIX: &str = "./components/";

/// Extension of the files the organizer is responsible for
pub const STYLESHEET_EXTENSION: &str = "css";

/// Settings file locations tried in order when no explicit path is given
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config/settings.toml",
    "./config/settings.toml",
    "~/.config/stylesort/settings.toml",
];

/// Default category table: folder name followed by the files it receives
pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "navigation",
        &[
            "central-actions-menu.css",
            "new-mobile-bottom-bar.css",
            "mobile-drawer-liquid-glass.css",
        ],
    ),
    (
        "chat",
        &[
            "coach-chat.css",
            "chat-messages.css",
            "chat-input-typing.css",
            "chat-notification-bubble.css",
            "global-chat-drawer.css",
            "global-chat-drawer-desktop.css",
            "voice-coach-panel.css",
            "unified-coach-drawer.css",
        ],
    ),
    (
        "buttons",
        &[
            "floating-chat-button.css",
            "floating-chat-button-step2.css",
            "floating-voice-coach-button.css",
            "floating-generate-button.css",
            "unified-floating-button.css",
        ],
    ),
    (
        "training",
        &[
            "training-loader.css",
            "training-illustration.css",
            "training-hero-animations.css",
            "training-coach-notification.css",
            "training-prescription-card-mobile.css",
            "active-exercise-card.css",
            "functional-training.css",
            "exercise-card-skeleton.css",
            "rep-display-optimizations.css",
        ],
    ),
    (
        "nutrition",
        &[
            "meal-scan-results.css",
            "fridge-scan-animations.css",
            "fasting-cta-3d.css",
        ],
    ),
    (
        "profile",
        &[
            "profile-sections.css",
            "settings-components.css",
            "connected-devices.css",
            "face-shape-controls.css",
        ],
    ),
    (
        "ui-elements",
        &[
            "inputs.css",
            "loading.css",
            "loader-animations.css",
            "generic-drawer.css",
            "page-header-responsive.css",
        ],
    ),
    (
        "effects",
        &["celebration-animations.css", "endurance-map.css"],
    ),
];

/// Fixed replacements for the root index, which imports these two files
/// through `./styles/components/` instead of `./components/`
pub const DEFAULT_ROOT_REWRITES: &[(&str, &str)] = &[
    (
        "./styles/components/loader-animations.css",
        "./styles/components/ui-elements/loader-animations.css",
    ),
    (
        "./styles/components/endurance-map.css",
        "./styles/components/effects/endurance-map.css",
    ),
];
