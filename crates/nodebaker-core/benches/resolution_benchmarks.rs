use criterion::{criterion_group, criterion_main, Criterion};
use nodebaker_core::{Baker, TemplateGenerator};
use nodebaker_schema::{
    AgentPoolProfile, CloudName, CloudSpecConfig, ContainerService, Distro, EnvironmentInfo,
    NodeBootstrappingConfiguration, OsType, SigConfig, SigGalleryConfig,
};
use nodebaker_toggles::Toggles;
use std::collections::BTreeMap;

struct NoopGenerator;

impl TemplateGenerator for NoopGenerator {
    fn node_bootstrapping_payload(&self, _config: &NodeBootstrappingConfiguration) -> String {
        String::new()
    }

    fn node_bootstrapping_cmd(&self, _config: &NodeBootstrappingConfiguration) -> String {
        String::new()
    }
}

fn selector() -> SigConfig {
    let galleries = [
        "AKSUbuntu",
        "AKSCBLMariner",
        "AKSAzureLinux",
        "AKSWindows",
        "AKSUbuntuEdgeZone",
    ]
    .into_iter()
    .map(|key| {
        (
            key.to_owned(),
            SigGalleryConfig {
                gallery_name: key.to_owned(),
                resource_group: format!("rg-{key}"),
            },
        )
    })
    .collect();
    SigConfig {
        tenant_id: "tenant".to_owned(),
        subscription_id: "sub".to_owned(),
        galleries,
    }
}

fn baker() -> Baker {
    let toggles = Toggles::from_toml_str(
        r#"
[[linux_node_image_version]]
name = "westus"
[linux_node_image_version.matches]
region = ["westus"]
[linux_node_image_version.versions]
"aks-ubuntu-containerd-22.04-gen2" = "202409.30.0"
"#,
    )
    .unwrap();
    Baker::with_builtin_catalogs(NoopGenerator)
        .unwrap()
        .with_toggles(toggles)
}

fn bench_node_bootstrapping(c: &mut Criterion) {
    let baker = baker();
    let config = NodeBootstrappingConfiguration {
        agent_pool_profile: AgentPoolProfile {
            name: "nodepool1".to_owned(),
            distro: Distro::new("aks-ubuntu-containerd-22.04-gen2"),
            os_type: OsType::Linux,
        },
        cloud_spec_config: CloudSpecConfig {
            cloud_name: CloudName::new("AzurePublicCloud"),
        },
        sig_config: selector(),
        container_service: ContainerService {
            location: "westus".to_owned(),
            ..ContainerService::default()
        },
        extra: BTreeMap::new(),
    };
    c.bench_function("node_bootstrapping_ubuntu", |b| {
        b.iter(|| baker.node_bootstrapping(&config).unwrap());
    });
}

fn bench_distro_catalog(c: &mut Criterion) {
    let baker = baker();
    let sig = selector();
    let env = EnvironmentInfo::new("westus");
    c.bench_function("distro_sig_image_config_westus", |b| {
        b.iter(|| baker.distro_sig_image_config(&sig, &env).unwrap());
    });
}

criterion_group!(benches, bench_node_bootstrapping, bench_distro_catalog);
criterion_main!(benches);
