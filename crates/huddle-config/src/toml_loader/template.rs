//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Huddle Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[session]
# room_id = "WebGLTest"
# user_id = "Test User"

[bridge]
# sink_name = "HuddleBridge"   # callback target the runtime addresses
# queue_capacity = 256         # 1-65536
# event_bus_capacity = 64      # 1-4096

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
