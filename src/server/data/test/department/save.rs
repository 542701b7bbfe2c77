use super::*;

/// Tests that a zero budget in a patch is applied.
///
/// Expected: Ok with budget 0 and the name unchanged
#[tokio::test]
async fn saves_zero_budget() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_department(db, "Design", 5000.0).await?;

    let repo = DepartmentRepository::new(db);
    let mut department = repo.find_by_id(created.id).await?.unwrap();
    department.apply(DepartmentPatch {
        budget: Some(0.0),
        ..Default::default()
    });
    let saved = repo.save(department).await?.unwrap();

    assert_eq!(saved.budget, 0.0);
    assert_eq!(saved.name, "Design");

    Ok(())
}
