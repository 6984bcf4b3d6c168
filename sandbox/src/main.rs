// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use matbatch_core::asset::{AssetUUID, BlendMode, MaterialAsset, ProjectAsset, RenderPass};
use matbatch_data::InMemoryProject;
use matbatch_editor::{BatchMaterialPanel, EditorSettings, LogNotifier};
use matbatch_lanes::MaterialMutation;

/// A small project used when no project file is given.
fn demo_project() -> InMemoryProject {
    let mut project = InMemoryProject::default();
    for (path, asset) in [
        (
            "materials/rock.mat",
            ProjectAsset::material(
                AssetUUID::new_v5("materials/rock.mat"),
                MaterialAsset::with_pass(RenderPass::default()),
            )
            .with_display_name("Mossy Rock")
            .with_name("Rock_01"),
        ),
        (
            "textures/rock_albedo.png",
            ProjectAsset::other(AssetUUID::new_v5("textures/rock_albedo.png"), "Texture"),
        ),
        (
            "materials/glass.mat",
            ProjectAsset::material(
                AssetUUID::new_v5("materials/glass.mat"),
                MaterialAsset::with_pass(RenderPass {
                    depth_write: false,
                    blend_mode: BlendMode::PremultipliedAlpha,
                    ..Default::default()
                }),
            )
            .with_name("Glass_02"),
        ),
        (
            "materials/variant.mat",
            ProjectAsset::material(
                AssetUUID::new_v5("materials/variant.mat"),
                MaterialAsset::without_pass(),
            ),
        ),
    ] {
        project.push_at(path, asset);
    }
    project
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    // Usage: sandbox [project.ron] [settings.ron]
    let mut args = std::env::args().skip(1);
    let project = match args.next() {
        Some(path) => InMemoryProject::from_ron_file(path)?,
        None => demo_project(),
    };
    let settings = match args.next() {
        Some(path) => EditorSettings::load(path)?,
        None => EditorSettings::default(),
    };

    let descriptor = BatchMaterialPanel::descriptor();
    log::info!("{} ({})", descriptor.name, descriptor.id);

    let mut panel = BatchMaterialPanel::new(&settings);
    log::info!("{}", panel.status());

    if panel.refresh(&project, &mut LogNotifier).is_none() {
        return Ok(());
    }
    log::info!("{}", panel.status());
    for (label, checked) in panel.rows() {
        log::info!("  [{}] {}", if checked { "x" } else { " " }, label);
    }

    for mutation in [
        MaterialMutation::DepthWriteOn,
        MaterialMutation::TwoSidedOn,
        MaterialMutation::BlendNormal,
    ] {
        panel.run(mutation);
        log::info!("{}", panel.status());
    }

    println!("{}", project.to_ron_string()?);
    Ok(())
}
