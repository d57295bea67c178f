use super::*;

/// Tests creating an offer on an existing listing by an existing club.
///
/// Expected: Ok with the offer readable with its listing and club
#[tokio::test]
async fn creates_offer_with_existing_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::connected(db.clone());

    let player = factory::create_player(db).await?;
    let listing = factory::create_listing(db, &player.id).await?;
    let club = factory::create_club(db).await?;

    let service = TransferOfferService::new(&store);
    let id = service
        .create(offer_params(&listing.id, &club.id))
        .await
        .unwrap();

    let offers = service.get_all().await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].offer.id, id);
    assert_eq!(offers[0].offer.status, OfferStatus::Pending);
    assert_eq!(offers[0].offer.message.as_deref(), Some("Serious bid"));
    assert_eq!(offers[0].listing.id.as_str(), listing.id);
    assert_eq!(offers[0].club.id.as_str(), club.id);

    Ok(())
}

/// Tests that the listing is checked before the club.
///
/// Expected: Err(ReferenceError::NotFound) naming the listing when both are missing
#[tokio::test]
async fn reports_missing_listing_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::connected(db.clone());

    let result = TransferOfferService::new(&store)
        .create(offer_params(&next_document_id(), &next_document_id()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::NotFound {
            kind: DocumentKind::TransferListing
        }))
    ));
    assert!(entity::prelude::TransferOffer::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that an unknown club rejects the offer.
///
/// Expected: Err(ReferenceError::NotFound) for Club
#[tokio::test]
async fn rejects_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::connected(db.clone());

    let player = factory::create_player(db).await?;
    let listing = factory::create_listing(db, &player.id).await?;

    let result = TransferOfferService::new(&store)
        .create(offer_params(&listing.id, &next_document_id()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::NotFound {
            kind: DocumentKind::Club
        }))
    ));

    Ok(())
}

/// Tests that offers whose club was removed are dropped from reads.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn skips_offers_with_missing_club() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = Store::connected(db.clone());

    let player = factory::create_player(db).await?;
    let listing = factory::create_listing(db, &player.id).await?;
    factory::create_offer(db, &listing.id, &next_document_id()).await?;

    let offers = TransferOfferService::new(&store).get_all().await.unwrap();

    assert!(offers.is_empty());

    Ok(())
}
