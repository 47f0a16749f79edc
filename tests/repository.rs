use catalog_service::domain::category::{CategoryUpdate, NewCategory};
use catalog_service::domain::product::{NewProduct, ProductUpdate};
use catalog_service::domain::types::{
    CategoryDescription, CategoryId, CategoryName, EntityStatus, ProductDescription, ProductName,
};
use catalog_service::repository::{
    CategoryReader, CategoryWriter, DieselRepository, ProductListQuery, ProductReader,
    ProductWriter,
};
use catalog_service::schema::{categories, products};
use diesel::prelude::*;

mod common;

fn new_category(name: &str, description: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
        description: CategoryDescription::new(description).expect("valid description"),
    }
}

fn new_product(name: &str, category_id: &CategoryId) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        category_id: category_id.clone(),
        description: ProductDescription::new("Casual").expect("valid description"),
    }
}

#[test]
fn create_category_stores_active_trimmed_record() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category(&new_category("  Shoes ", " Footwear "))
        .expect("should create category");

    assert_eq!(created.name, "Shoes");
    assert_eq!(created.description, "Footwear");
    assert_eq!(created.status, EntityStatus::Active);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo
        .get_category_by_id(&created.id)
        .expect("should query category")
        .expect("category should exist");
    assert_eq!(fetched, created);

    let by_name = repo
        .get_category_by_name(&CategoryName::new("Shoes").unwrap())
        .expect("should query category")
        .expect("category should exist");
    assert_eq!(by_name.id, created.id);
}

#[test]
fn partial_update_keeps_unlisted_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_category(&new_category("Shoes", "Footwear"))
        .expect("should create category");

    let update = CategoryUpdate {
        name: Some(CategoryName::new("Boots").unwrap()),
        description: None,
    };
    let updated = repo
        .update_category(&created.id, &update)
        .expect("should update category")
        .expect("category should be active");

    assert_eq!(updated.name, "Boots");
    assert_eq!(updated.description, "Footwear");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn soft_delete_hides_category_but_keeps_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_category(&new_category("Shoes", "Footwear"))
        .expect("should create category");

    assert_eq!(repo.delete_category(&created.id).unwrap(), 1);
    assert_eq!(repo.delete_category(&created.id).unwrap(), 0);

    assert!(repo.get_category_by_id(&created.id).unwrap().is_none());
    assert!(
        repo.get_category_by_name(&CategoryName::new("Shoes").unwrap())
            .unwrap()
            .is_none()
    );
    let update = CategoryUpdate {
        name: Some(CategoryName::new("Boots").unwrap()),
        description: None,
    };
    assert!(repo.update_category(&created.id, &update).unwrap().is_none());

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let (name, is_deleted): (String, bool) = categories::table
        .filter(categories::id.eq(created.id.as_str()))
        .select((categories::name, categories::is_deleted))
        .first(&mut conn)
        .expect("row should remain after soft delete");
    assert_eq!(name, "Shoes");
    assert!(is_deleted);
}

#[test]
fn name_lookup_prefers_the_active_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let first = repo
        .create_category(&new_category("Shoes", "Old"))
        .expect("should create category");
    repo.delete_category(&first.id).expect("should delete");
    let second = repo
        .create_category(&new_category("Shoes", "New"))
        .expect("should create category");

    let found = repo
        .get_category_by_name(&CategoryName::new("Shoes").unwrap())
        .unwrap()
        .expect("active category should be found");
    assert_eq!(found.id, second.id);
}

#[test]
fn products_are_listed_per_category_without_deleted_ones() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shoes = repo.create_category(&new_category("Shoes", "Footwear")).unwrap();
    let hats = repo.create_category(&new_category("Hats", "Headwear")).unwrap();

    let sneaker = repo.create_product(&new_product("Sneaker", &shoes.id)).unwrap();
    let boot = repo.create_product(&new_product("Boot", &shoes.id)).unwrap();
    repo.create_product(&new_product("Cap", &hats.id)).unwrap();

    assert_eq!(repo.delete_product(&boot.id).unwrap(), 1);

    let in_shoes = repo
        .list_products(ProductListQuery::default().category(shoes.id.clone()))
        .unwrap();
    assert_eq!(in_shoes.len(), 1);
    assert_eq!(in_shoes[0].id, sneaker.id);

    let all = repo.list_products(ProductListQuery::default()).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.status == EntityStatus::Active));
}

#[test]
fn product_update_moves_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shoes = repo.create_category(&new_category("Shoes", "Footwear")).unwrap();
    let boots = repo.create_category(&new_category("Boots", "Footwear")).unwrap();
    let product = repo.create_product(&new_product("Sneaker", &shoes.id)).unwrap();

    let update = ProductUpdate {
        category_id: Some(boots.id.clone()),
        ..Default::default()
    };
    let updated = repo
        .update_product(&product.id, &update)
        .unwrap()
        .expect("product should be active");

    assert_eq!(updated.category_id, boots.id);
    assert_eq!(updated.name, "Sneaker");

    let mut conn = test_db.pool().get().unwrap();
    let stored: String = products::table
        .filter(products::id.eq(product.id.as_str()))
        .select(products::category_id)
        .first(&mut conn)
        .unwrap();
    assert_eq!(stored, boots.id.as_str());
}

#[test]
fn deleting_a_category_does_not_touch_its_products() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shoes = repo.create_category(&new_category("Shoes", "Footwear")).unwrap();
    let product = repo.create_product(&new_product("Sneaker", &shoes.id)).unwrap();

    repo.delete_category(&shoes.id).unwrap();

    let still_there = repo
        .get_product_by_id(&product.id)
        .unwrap()
        .expect("product stays active");
    assert_eq!(still_there.category_id, shoes.id);
}
