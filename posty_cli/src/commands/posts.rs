use crate::client::CliClient;
use crate::error::Result;
use crate::utils::render::render_post;

pub async fn handle(cli_client: &CliClient, user_id: &str) -> Result<()> {
    let posts = cli_client.list_posts(user_id).await?;
    match posts.len() {
        0 => {
            println!("No posts saved for {user_id}.");
        }
        _ => {
            println!("created  id  prompt\n======");
            for post in posts {
                println!("{}", render_post(&post));
            }
        }
    };
    Ok(())
}
