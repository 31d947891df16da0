use serde::{Deserialize, Serialize};

/// Default page number when the client omits or sends an invalid one.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Uniform response envelope applied to every API response.
///
/// `code` mirrors the HTTP status (200/400/401/403/404/500) so clients that
/// only look at the body keep working. `data` is omitted from the JSON when
/// absent.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope with a payload and the stock message.
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// Success envelope with a payload and a custom message.
    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Error envelope with an explicit code and message, no payload.
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with a message and no payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: None,
        }
    }
}

/// Paginated collection wrapper matching the frontend `PageResponse<T>` shape.
#[derive(Serialize, Deserialize, Debug)]
pub struct PageDto<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

impl<T> PageDto<T> {
    /// Builds a page, computing the total page count from total and size.
    pub fn new(records: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        let pages = if size > 0 { total.div_ceil(size) } else { 0 };
        Self {
            records,
            total,
            page,
            size,
            pages,
        }
    }
}

/// Clamps client-supplied pagination to sane bounds.
///
/// Pages are 1-based on the wire; a page below 1 falls back to the default,
/// and sizes outside 1..=MAX_PAGE_SIZE fall back to the default size.
pub fn clamp_paging(page: u64, size: u64) -> (u64, u64) {
    let page = if page < 1 { DEFAULT_PAGE } else { page };
    let size = if size < 1 || size > MAX_PAGE_SIZE {
        DEFAULT_PAGE_SIZE
    } else {
        size
    };
    (page, size)
}
