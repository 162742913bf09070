use crate::error::Code;

pub const ALLOWED_BRANDS: [&str; 3] = ["BMW", "Benz", "Audi"];

/// 校验投票参数，按固定顺序返回第一个失败的结果码
pub fn validate_poll(email: &str, brand: &str) -> Result<(), Code> {
    if email.is_empty() {
        return Err(Code::EmptyEmail);
    }
    if brand.is_empty() {
        return Err(Code::EmptyBrand);
    }
    if !email.contains('@') {
        return Err(Code::InvalidEmail);
    }
    if !ALLOWED_BRANDS.contains(&brand) {
        return Err(Code::InvalidBrand);
    }
    Ok(())
}
