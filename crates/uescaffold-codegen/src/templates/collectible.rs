//! ACollectibleItem — pickup actor that can be attached to the hero's back.

use crate::config::ScaffoldConfig;

use super::render;

const HEADER: &str = r##"
#pragma once

#include "CoreMinimal.h"
#include "GameFramework/Actor.h"
#include "CollectibleItem.generated.h"

UCLASS()
class {{module_api}} ACollectibleItem : public AActor
{
    GENERATED_BODY()

public:
    ACollectibleItem();

    void OnCollected();

protected:
    UPROPERTY(VisibleAnywhere, BlueprintReadOnly, Category = "Item")
    UStaticMeshComponent* ItemMesh;
};
"##;

const SOURCE: &str = r##"
#include "Collectibles/CollectibleItem.h"

#include "Components/StaticMeshComponent.h"

ACollectibleItem::ACollectibleItem()
{
    PrimaryActorTick.bCanEverTick = false;

    ItemMesh = CreateDefaultSubobject<UStaticMeshComponent>(TEXT("ItemMesh"));
    ItemMesh->SetCollisionEnabled(ECollisionEnabled::QueryAndPhysics);
    ItemMesh->SetSimulatePhysics(true);
    SetRootComponent(ItemMesh);
}

void ACollectibleItem::OnCollected()
{
    ItemMesh->SetSimulatePhysics(false);
    SetActorEnableCollision(false);
}
"##;

pub fn header(config: &ScaffoldConfig) -> String {
    render(HEADER, config)
}

pub fn source(config: &ScaffoldConfig) -> String {
    render(SOURCE, config)
}
