const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Human-readable size for the selected-file row. Zero renders empty.
pub fn format_size(bytes: u64) -> String {
    match bytes {
        0 => String::new(),
        b if b < KIB => format!("{b} B"),
        b if b < MIB => format!("{:.1} KB", b as f64 / KIB as f64),
        b if b < GIB => format!("{:.1} MB", b as f64 / MIB as f64),
        b => format!("{:.2} GB", b as f64 / GIB as f64),
    }
}
