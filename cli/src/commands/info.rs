use crate::terminal::print;

pub fn info() {
    print::set_key_width(&["Name", "Version", "Purpose", "Storage"]);

    print::aligned_line("Name", env!("CARGO_PKG_NAME"));
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line(
        "Purpose",
        "list items with a photo, browse and filter what neighbors offer",
    );
    print::aligned_line("Storage", "volatile; listings live for one session only");
}
