//! AProgressShaderManager — dynamic material updater driving distance and
//! collection-progress heat parameters.

use crate::config::ScaffoldConfig;

use super::render;

const HEADER: &str = r##"
#pragma once

#include "CoreMinimal.h"
#include "GameFramework/Actor.h"
#include "ProgressShaderManager.generated.h"

class UMaterialInstanceDynamic;
class UStaticMeshComponent;

UCLASS()
class {{module_api}} AProgressShaderManager : public AActor
{
    GENERATED_BODY()

public:
    AProgressShaderManager();

    virtual void Tick(float DeltaTime) override;

protected:
    virtual void BeginPlay() override;

    UFUNCTION(BlueprintCallable, Category = "Shader")
    void RefreshHeat();

    UPROPERTY(VisibleAnywhere, BlueprintReadOnly, Category = "Shader")
    UStaticMeshComponent* PreviewMesh;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    AActor* PlayerActor;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    AActor* TargetActor;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    float WarmDistance;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    float CoolDistance;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    float CollectedIntensityScale;

    UPROPERTY(EditAnywhere, BlueprintReadWrite, Category = "Shader")
    UMaterialInterface* BaseMaterial;

    UPROPERTY()
    UMaterialInstanceDynamic* DynamicMaterial;

    int32 CachedCollectedCount;
};
"##;

const SOURCE: &str = r##"
#include "Shaders/ProgressShaderManager.h"

#include "Characters/AgentKaiCharacter.h"
#include "Collectibles/CollectibleItem.h"
#include "Components/StaticMeshComponent.h"
#include "Materials/MaterialInstanceDynamic.h"
#include "Kismet/KismetMathLibrary.h"

AProgressShaderManager::AProgressShaderManager()
{
    PrimaryActorTick.bCanEverTick = true;

    PreviewMesh = CreateDefaultSubobject<UStaticMeshComponent>(TEXT("PreviewMesh"));
    SetRootComponent(PreviewMesh);

    WarmDistance = 200.0f;
    CoolDistance = 1200.0f;
    CollectedIntensityScale = 0.15f;
    CachedCollectedCount = 0;
}

void AProgressShaderManager::BeginPlay()
{
    Super::BeginPlay();

    if (BaseMaterial)
    {
        DynamicMaterial = UMaterialInstanceDynamic::Create(BaseMaterial, this);
        PreviewMesh->SetMaterial(0, DynamicMaterial);
    }

    RefreshHeat();
}

void AProgressShaderManager::Tick(float DeltaTime)
{
    Super::Tick(DeltaTime);
    RefreshHeat();
}

void AProgressShaderManager::RefreshHeat()
{
    if (!DynamicMaterial || !PlayerActor || !TargetActor)
    {
        return;
    }

    const float Distance = FVector::Distance(PlayerActor->GetActorLocation(), TargetActor->GetActorLocation());
    const float HeatAlpha = UKismetMathLibrary::MapRangeClamped(Distance, WarmDistance, CoolDistance, 1.0f, 0.0f);

    float Intensity = HeatAlpha;
    if (const AAgentKaiCharacter* Agent = Cast<AAgentKaiCharacter>(PlayerActor))
    {
        const int32 NewCount = Agent->GetMesh() ? Agent->GetMesh()->GetNumChildrenComponents() : CachedCollectedCount;
        CachedCollectedCount = NewCount;
        Intensity += NewCount * CollectedIntensityScale;
    }

    DynamicMaterial->SetScalarParameterValue(TEXT("HeatValue"), HeatAlpha);
    DynamicMaterial->SetScalarParameterValue(TEXT("HeatIntensity"), Intensity);
}
"##;

pub fn header(config: &ScaffoldConfig) -> String {
    render(HEADER, config)
}

pub fn source(config: &ScaffoldConfig) -> String {
    render(SOURCE, config)
}
