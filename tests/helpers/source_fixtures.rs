//! Common source code fixtures for tests.

// Exclusive: first two names ascending
pub const COLOR: &str = r#"
package ui;

public @interface Color {
    int BLUE = 0, GREEN = 1, RED = 2;
}
"#;

// Combinable: first two names not ascending
pub const PERMISSION: &str = r#"
package fs;

@interface Permission {
    int WRITE = 2;
    int READ = 1;
    int EXECUTE = 4;
}
"#;

// Reference-typed: always exclusive
pub const MODE: &str = r#"
@interface Mode {
    String ON = "on", OFF = "off";
}
"#;

// Declares a method, never a constant group
pub const RETENTION: &str = r#"
@interface Retention {
    int SOURCE = 0, RUNTIME = 1;
    int value();
}
"#;

pub const SHAPE: &str = r#"
interface Shape {
    void paint(int size, @Color int color);
    @Color int fill();
}
"#;

pub const ALL_GROUPS: &[(&str, &str)] = &[
    ("Color.java", COLOR),
    ("Permission.java", PERMISSION),
    ("Mode.java", MODE),
    ("Retention.java", RETENTION),
    ("Shape.java", SHAPE),
];
