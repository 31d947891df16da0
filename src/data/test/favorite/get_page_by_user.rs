use super::*;

/// Tests that a user's favorites are paginated and scoped to that user.
///
/// Expected: only the requesting user's rows, with the correct total
#[tokio::test]
async fn pages_are_scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let reader = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    for _ in 0..3 {
        let article = factory::article::create_published_article(db, author.id).await?;
        repo.create(reader.id, article.id).await?;
    }
    let someone_elses = factory::article::create_published_article(db, author.id).await?;
    repo.create(other.id, someone_elses.id).await?;

    let (rows, total) = repo.get_page_by_user(reader.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|f| f.user_id == reader.id));

    Ok(())
}
