use mongodb::{Database, IndexModel, bson::doc, options::IndexOptions};

pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    // preorders: unique email, so duplicate checks hold under concurrent inserts
    let col = db.collection::<mongodb::bson::Document>("preorders");
    let model = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    col.create_index(model, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
