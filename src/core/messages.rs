//! User-facing strings. The hosting application renders Japanese copy, so the
//! messages here stay literal rather than going through any i18n layer.

pub const CONFIRM_DELETE: &str =
    "この投稿を削除してもよろしいですか？\nこの操作は取り消せません。";

pub const TITLE_REQUIRED: &str = "タイトルを入力してください。";
pub const AUTHOR_REQUIRED: &str = "投稿者名を入力してください。";
pub const CONTENT_REQUIRED: &str = "内容を入力してください。";

pub const APP_LOADED: &str = "📝 掲示板アプリケーションが読み込まれました";
