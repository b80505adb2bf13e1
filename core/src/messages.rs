//! User-facing message catalogue.
//!
//! The blog app ships in Indonesian; every string a user can see when an
//! operation fails lives here so the classifier, the validators and the
//! error type agree on wording.

pub const UNAUTHORIZED: &str = "Sesi berakhir. Silakan login kembali.";
pub const NETWORK: &str = "Kesalahan jaringan";
pub const UNKNOWN: &str = "Terjadi kesalahan tidak terduga";

pub const INVALID_REQUEST: &str = "Permintaan tidak valid atau data input salah.";
pub const VALIDATION: &str = "Data yang dimasukkan tidak valid.";
pub const VALIDATION_FAILED_PREFIX: &str = "Validasi gagal";
pub const FORBIDDEN: &str = "Anda tidak memiliki izin untuk melakukan tindakan ini.";
pub const NOT_FOUND: &str = "Sumber daya tidak ditemukan.";
pub const PAYLOAD_TOO_LARGE: &str = "File terlalu besar (maksimal 10MB).";
pub const SERVER_ERROR: &str = "Terjadi kesalahan pada server. Coba lagi nanti.";
pub const NO_DETAIL: &str = "Tidak ada detail.";

pub const FILE_TYPE_NOT_ALLOWED: &str = "Tipe file tidak diizinkan. Gunakan JPG, JPEG, atau PNG";
pub const PHOTO_REQUIRED: &str = "Gambar wajib diupload";
pub const KEYWORD_REQUIRED: &str = "Keyword pencarian wajib diisi";
pub const UPLOAD_FAILED: &str = "Gagal mengunggah file ke server.";

pub const INVALID_IMAGE: &str = "File gambar tidak valid";
pub const IMAGE_TOO_LARGE: &str = "Ukuran file maksimal 10MB";
pub const REPLACEMENT_IMAGE_INVALID: &str = "File gambar baru tidak valid atau kosong.";
pub const REPLACEMENT_IMAGE_TOO_LARGE: &str = "Ukuran file baru maksimal 10MB.";
pub const REPLACEMENT_IMAGE_TYPE: &str = "Tipe file gambar baru tidak diizinkan (JPG, JPEG, PNG).";
pub const KEYWORD_EMPTY: &str = "Keyword pencarian tidak boleh kosong.";

pub const FAILED_LOAD_POSTS: &str = "Gagal memuat postingan";
pub const FAILED_LOAD_AUTHOR_POSTS: &str = "Gagal memuat postingan dari author ini.";
pub const FAILED_LOAD_CATEGORY_POSTS: &str = "Gagal memuat post dari kategori ini.";
pub const POST_NOT_FOUND: &str = "Postingan tidak ditemukan";
pub const FAILED_LOAD_CATEGORIES: &str = "Gagal memuat kategori";
pub const FAILED_SEARCH: &str = "Gagal melakukan pencarian.";
pub const FAILED_CREATE_POST: &str = "Gagal membuat postingan";
pub const FAILED_UPDATE_POST: &str = "Gagal memperbarui postingan";
pub const FAILED_DELETE_POST: &str = "Gagal menghapus postingan";
pub const FAILED_CREATE_COMMENT: &str = "Gagal membuat komentar";
pub const FAILED_DELETE_COMMENT: &str = "Gagal menghapus komentar";
pub const FAILED_TOGGLE_LIKE: &str = "Gagal toggle like";
pub const FAILED_LOGIN: &str = "Login gagal";
pub const FAILED_REGISTER: &str = "Registrasi gagal";

/// Server-side markers the classifier looks for, matched case-insensitively.
pub mod markers {
    pub const FILE_TYPE_NOT_ALLOWED: &str = "File type not allowed";
    pub const PHOTO_REQUIRED: &str = "photo wajib diisi";
    pub const KEYWORD_REQUIRED: &str = "Keyword pencarian wajib diisi";
    pub const UPLOAD_FAILED: &str = "Failed to upload file";
}
