pub struct Icons;

impl Icons {
    pub const COFFEE: &str = "☕";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const NEW: &str = "✨";
    pub const MOD: &str = "📝";
    pub const DATABASE: &str = "🗄️";
}
