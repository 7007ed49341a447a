/// 백엔드 엔드포인트 경로
// region:    --- Auth
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_REQUEST_OTP: &str = "/api/auth/request-otp";
pub const AUTH_VERIFY_OTP: &str = "/api/auth/verify-otp";
pub const AUTH_PROFILE: &str = "/api/auth/profile";
pub const AUTH_EDIT_PROFILE: &str = "/api/auth/edit-profile";
// endregion: --- Auth

// region:    --- Seller
pub const SELLER_ACTIVE_LISTINGS: &str = "/api/seller/active-listings";
pub const SELLER_MY_LISTINGS: &str = "/api/seller/my-listings";
pub const SELLER_ADD_PRODUCT: &str = "/api/seller/add-product";

pub fn seller_upload_images(product_id: i64) -> String {
    format!("/api/seller/upload-images/{}", product_id)
}

pub fn seller_product_by_id(product_id: i64) -> String {
    format!("/api/seller/get-product-by-id/{}", product_id)
}

pub fn seller_edit_product(product_id: i64) -> String {
    format!("/api/seller/edit-product/{}", product_id)
}

pub fn seller_delete_product(product_id: i64) -> String {
    format!("/api/seller/delete-product/{}", product_id)
}

pub fn seller_buyer_info(product_id: i64) -> String {
    format!("/api/seller/buyer-info/{}", product_id)
}
// endregion: --- Seller

// region:    --- Bid
pub const BID_PLACE: &str = "/api/bid/place";
pub const BID_MY_BIDS: &str = "/api/bid/my-bids";

pub fn bid_highest(product_id: i64) -> String {
    format!("/api/bid/highest/{}", product_id)
}

pub fn bid_product(product_id: i64) -> String {
    format!("/api/bid/product/{}", product_id)
}
// endregion: --- Bid

// region:    --- Query
pub const QUERY_POST: &str = "/api/query/post";

pub fn query_product(product_id: i64) -> String {
    format!("/api/query/{}", product_id)
}

pub fn query_edit(query_id: i64) -> String {
    format!("/api/query/edit/{}", query_id)
}

pub fn query_delete(query_id: i64) -> String {
    format!("/api/query/delete/{}", query_id)
}

pub fn query_respond(query_id: i64) -> String {
    format!("/api/query/respond/{}", query_id)
}
// endregion: --- Query

// region:    --- Admin
pub const ADMIN_LOGIN: &str = "/api/admin/login";
pub const ADMIN_PENDING_PRODUCTS: &str = "/api/admin/approval-pending-products";
pub const ADMIN_APPROVE_PRODUCT: &str = "/api/admin/approve-product";
// endregion: --- Admin
