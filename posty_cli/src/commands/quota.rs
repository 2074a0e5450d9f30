use crate::commands::guest_quota;
use crate::error::Result;
use crate::utils::render::render_quota;

pub fn handle(reset: bool) -> Result<()> {
    let quota = guest_quota();
    if reset {
        quota.reset()?;
        println!("Guest counter cleared.");
    }
    println!("{}", render_quota(quota.count()));
    Ok(())
}
